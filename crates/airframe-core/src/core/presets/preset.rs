use crate::core::models::material::Material;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetKind {
    BodyTube,
    Transition,
    NoseCone,
    TubeCoupler,
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PresetKind::BodyTube => "body tube",
                PresetKind::Transition => "transition",
                PresetKind::NoseCone => "nose cone",
                PresetKind::TubeCoupler => "tube coupler",
            }
        )
    }
}

/// A catalog part whose dimensions can be applied to a component.
///
/// Every dimension is optional; loading a preset only overrides what it specifies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ComponentPreset {
    pub kind: PresetKind,
    pub manufacturer: String,
    pub part_number: String,
    pub description: Option<String>,
    /// Outer diameter in meters.
    pub outer_diameter: Option<f64>,
    /// Inner diameter in meters.
    pub inner_diameter: Option<f64>,
    /// Length in meters.
    pub length: Option<f64>,
    pub material: Option<Material>,
}

impl ComponentPreset {
    pub fn new(kind: PresetKind, manufacturer: &str, part_number: &str) -> Self {
        Self {
            kind,
            manufacturer: manufacturer.to_string(),
            part_number: part_number.to_string(),
            description: None,
            outer_diameter: None,
            inner_diameter: None,
            length: None,
            material: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PresetError {
    #[error("Preset '{part_number}' describes a {found}, expected a {expected}")]
    KindMismatch {
        part_number: String,
        expected: PresetKind,
        found: PresetKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_deserializes_with_kebab_case_keys() {
        let preset: ComponentPreset = toml::from_str(
            r#"
            kind = "body-tube"
            manufacturer = "Estes"
            part-number = "BT-50"
            outer-diameter = 0.0246
            inner-diameter = 0.0241
            "#,
        )
        .unwrap();
        assert_eq!(preset.kind, PresetKind::BodyTube);
        assert_eq!(preset.part_number, "BT-50");
        assert_eq!(preset.outer_diameter, Some(0.0246));
        assert_eq!(preset.inner_diameter, Some(0.0241));
        assert!(preset.length.is_none());
        assert!(preset.material.is_none());
    }

    #[test]
    fn preset_rejects_unknown_fields() {
        let result: Result<ComponentPreset, _> = toml::from_str(
            r#"
            kind = "body-tube"
            manufacturer = "Estes"
            part-number = "BT-50"
            colour = "red"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn kind_mismatch_message_names_both_kinds() {
        let err = PresetError::KindMismatch {
            part_number: "PNC-50".to_string(),
            expected: PresetKind::BodyTube,
            found: PresetKind::NoseCone,
        };
        assert_eq!(
            err.to_string(),
            "Preset 'PNC-50' describes a nose cone, expected a body tube"
        );
    }
}
