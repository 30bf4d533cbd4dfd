use crate::error::{CliError, Result};
use airframe::core::models::assembly::Assembly;
use airframe::core::models::body_tube::BodyTube;
use airframe::core::models::material::Material;
use airframe::core::models::motor::{FlightConfigId, IgnitionEvent, Motor};
use airframe::core::models::transition::Transition;
use airframe::core::presets::catalog::PresetCatalog;
use airframe::engine::editor::{AssemblyEditor, BodyTubeCommand, TransitionCommand};
use airframe::engine::notify::ChangeNotifier;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, trace};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "kebab-case")]
enum RadiusKeyword {
    Auto,
}

/// A radius given either as a number in meters or as the keyword `"auto"`.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
enum PartialRadius {
    Value(f64),
    Keyword(RadiusKeyword),
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
struct PartialMotorAssignment {
    config: FlightConfigId,
    designation: String,
    diameter: f64,
    length: f64,
    #[serde(rename = "ejection-delay")]
    ejection_delay: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialIgnition {
    event: Option<String>,
    delay: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialBodyTube {
    preset: Option<String>,
    length: Option<f64>,
    outer_radius: Option<PartialRadius>,
    thickness: Option<f64>,
    filled: Option<bool>,
    material: Option<Material>,
    motor_mount: Option<bool>,
    overhang: Option<f64>,
    ignition: Option<PartialIgnition>,
    #[serde(default)]
    motor: Vec<PartialMotorAssignment>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct PartialTransition {
    length: Option<f64>,
    fore_radius: Option<PartialRadius>,
    aft_radius: Option<PartialRadius>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case", tag = "type")]
enum PartialComponent {
    BodyTube(PartialBodyTube),
    Transition(PartialTransition),
    NoseCone(PartialTransition),
}

/// An assembly definition file: `[[component]]` tables listed fore to aft.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAssembly {
    #[serde(default, rename = "component")]
    components: Vec<PartialComponent>,
}

impl PartialAssembly {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading assembly definition from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Builds the assembly.
    ///
    /// Radii are applied to every component before any wall thickness, so that each
    /// thickness is clamped against the final resolved radius of its tube.
    pub fn into_assembly(self, catalog: Option<&PresetCatalog>) -> Result<Assembly> {
        let mut assembly = Assembly::new();
        let mut body_tubes = Vec::new();
        let mut transitions = Vec::new();

        for component in self.components {
            match component {
                PartialComponent::BodyTube(partial) => {
                    let id = assembly.push(BodyTube::new());
                    body_tubes.push((id, partial));
                }
                PartialComponent::Transition(partial) => {
                    let id = assembly.push(Transition::new());
                    transitions.push((id, partial));
                }
                PartialComponent::NoseCone(partial) => {
                    let id = assembly.push(Transition::nose_cone(Transition::new().length()));
                    transitions.push((id, partial));
                }
            }
        }

        {
            let notifier = ChangeNotifier::with_callback(Box::new(|change| {
                trace!(component = ?change.component, kind = %change.kind, "Definition applied.");
            }));
            let mut editor = AssemblyEditor::new(&mut assembly, notifier);

            for (id, partial) in &transitions {
                for command in partial.commands() {
                    editor.apply_transition(*id, command)?;
                }
            }
            for (id, partial) in &body_tubes {
                for command in partial.shape_commands(catalog)? {
                    editor.apply_body_tube(*id, command)?;
                }
            }
            for (id, partial) in &body_tubes {
                for command in partial.wall_commands() {
                    editor.apply_body_tube(*id, command)?;
                }
            }
        }

        debug!(
            "Built assembly with {} body tubes and {} transitions.",
            body_tubes.len(),
            transitions.len()
        );
        Ok(assembly)
    }
}

impl PartialTransition {
    fn commands(&self) -> Vec<TransitionCommand> {
        let mut commands = Vec::new();
        if let Some(length) = self.length {
            commands.push(TransitionCommand::SetLength(length));
        }
        match self.fore_radius {
            Some(PartialRadius::Value(r)) => commands.push(TransitionCommand::SetForeRadius(r)),
            Some(PartialRadius::Keyword(RadiusKeyword::Auto)) => {
                commands.push(TransitionCommand::SetForeRadiusAutomatic(true))
            }
            None => {}
        }
        match self.aft_radius {
            Some(PartialRadius::Value(r)) => commands.push(TransitionCommand::SetAftRadius(r)),
            Some(PartialRadius::Keyword(RadiusKeyword::Auto)) => {
                commands.push(TransitionCommand::SetAftRadiusAutomatic(true))
            }
            None => {}
        }
        commands
    }
}

impl PartialBodyTube {
    fn shape_commands(&self, catalog: Option<&PresetCatalog>) -> Result<Vec<BodyTubeCommand>> {
        let mut commands = Vec::new();

        if let Some(part_number) = &self.preset {
            let catalog = catalog.ok_or_else(|| {
                CliError::Config(format!(
                    "Preset '{}' is referenced but no catalog was given (use --catalog).",
                    part_number
                ))
            })?;
            let preset = catalog.get(part_number).ok_or_else(|| {
                CliError::Config(format!("Unknown preset part number '{}'.", part_number))
            })?;
            commands.push(BodyTubeCommand::LoadPreset(preset.clone()));
        }
        if let Some(length) = self.length {
            commands.push(BodyTubeCommand::SetLength(length));
        }
        match self.outer_radius {
            Some(PartialRadius::Value(r)) => commands.push(BodyTubeCommand::SetOuterRadius(r)),
            Some(PartialRadius::Keyword(RadiusKeyword::Auto)) => {
                commands.push(BodyTubeCommand::SetOuterRadiusAutomatic(true))
            }
            None => {}
        }
        if let Some(material) = &self.material {
            commands.push(BodyTubeCommand::SetMaterial(material.clone()));
        }
        if let Some(mount) = self.motor_mount {
            commands.push(BodyTubeCommand::SetMotorMount(mount));
        }
        if let Some(overhang) = self.overhang {
            commands.push(BodyTubeCommand::SetMotorOverhang(overhang));
        }
        if let Some(ignition) = &self.ignition {
            if let Some(event) = &ignition.event {
                let event: IgnitionEvent = event
                    .parse()
                    .map_err(|e| CliError::Config(format!("{}", e)))?;
                commands.push(BodyTubeCommand::SetIgnitionEvent(event));
            }
            if let Some(delay) = ignition.delay {
                commands.push(BodyTubeCommand::SetIgnitionDelay(delay));
            }
        }
        for assignment in &self.motor {
            commands.push(BodyTubeCommand::SetMotor {
                config: assignment.config.clone(),
                motor: Some(Motor::new(
                    &assignment.designation,
                    assignment.diameter,
                    assignment.length,
                )),
            });
            if let Some(delay) = assignment.ejection_delay {
                commands.push(BodyTubeCommand::SetMotorDelay {
                    config: assignment.config.clone(),
                    delay,
                });
            }
        }
        Ok(commands)
    }

    fn wall_commands(&self) -> Vec<BodyTubeCommand> {
        let mut commands = Vec::new();
        if let Some(thickness) = self.thickness {
            commands.push(BodyTubeCommand::SetThickness(thickness));
        }
        if let Some(filled) = self.filled {
            commands.push(BodyTubeCommand::SetFilled(filled));
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airframe::core::models::component::ComponentKind;
    use std::fs;
    use tempfile::tempdir;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    const CATALOG: &str = r#"
        [[preset]]
        kind = "body-tube"
        manufacturer = "Estes"
        part-number = "BT-50"
        outer-diameter = 0.0246
        inner-diameter = 0.0240
        length = 0.457
    "#;

    fn parse(content: &str) -> PartialAssembly {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn explicit_and_automatic_tubes_are_built_in_order() {
        let assembly = parse(
            r#"
            [[component]]
            type = "nose-cone"
            length = 0.1

            [[component]]
            type = "body-tube"
            length = 0.3
            outer-radius = 0.0125

            [[component]]
            type = "body-tube"
            outer-radius = "auto"
            "#,
        )
        .into_assembly(None)
        .unwrap();

        let ids = assembly.ids().to_vec();
        assert_eq!(ids.len(), 3);
        assert_eq!(
            assembly.component(ids[0]).unwrap().kind(),
            ComponentKind::NoseCone
        );
        assert_eq!(assembly.outer_radius(ids[1]), Some(0.0125));
        assert_eq!(assembly.outer_radius(ids[2]), Some(0.0125));
    }

    #[test]
    fn thickness_is_clamped_against_the_resolved_radius_of_a_later_tube() {
        let assembly = parse(
            r#"
            [[component]]
            type = "body-tube"
            thickness = 0.05

            [[component]]
            type = "body-tube"
            outer-radius = 0.01
            "#,
        )
        .into_assembly(None)
        .unwrap();

        let ids = assembly.ids().to_vec();
        assert_eq!(assembly.body_tube(ids[0]).unwrap().thickness(), 0.01);
    }

    #[test]
    fn motors_and_ignition_are_applied() {
        let assembly = parse(
            r#"
            [[component]]
            type = "body-tube"
            outer-radius = 0.0125
            motor-mount = true
            overhang = 0.01

            [component.ignition]
            event = "burnout"
            delay = 1.5

            [[component.motor]]
            config = "A"
            designation = "C6-5"
            diameter = 0.018
            length = 0.07
            ejection-delay = 5.0
            "#,
        )
        .into_assembly(None)
        .unwrap();

        let tube = assembly.body_tube(assembly.ids()[0]).unwrap();
        let config = FlightConfigId::from("A");
        assert!(tube.is_motor_mount());
        assert_eq!(tube.motor_overhang(), 0.01);
        assert_eq!(tube.ignition_event(), IgnitionEvent::Burnout);
        assert_eq!(tube.ignition_delay(), 1.5);
        assert_eq!(tube.motor(&config).unwrap().designation, "C6-5");
        assert_eq!(tube.motor_delay(&config), 5.0);
    }

    #[test]
    fn preset_reference_is_resolved_against_catalog() {
        let catalog = PresetCatalog::parse(CATALOG, "inline").unwrap();
        let assembly = parse(
            r#"
            [[component]]
            type = "body-tube"
            preset = "BT-50"
            "#,
        )
        .into_assembly(Some(&catalog))
        .unwrap();

        let id = assembly.ids()[0];
        let tube = assembly.body_tube(id).unwrap();
        assert!(!tube.is_outer_radius_automatic());
        assert!(f64_approx_equal(assembly.outer_radius(id).unwrap(), 0.0123));
        assert_eq!(tube.length(), 0.457);
    }

    #[test]
    fn preset_without_catalog_is_a_configuration_error() {
        let result = parse(
            r#"
            [[component]]
            type = "body-tube"
            preset = "BT-50"
            "#,
        )
        .into_assembly(None);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("--catalog")));
    }

    #[test]
    fn unknown_preset_is_a_configuration_error() {
        let catalog = PresetCatalog::parse(CATALOG, "inline").unwrap();
        let result = parse(
            r#"
            [[component]]
            type = "body-tube"
            preset = "BT-80"
            "#,
        )
        .into_assembly(Some(&catalog));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("BT-80")));
    }

    #[test]
    fn invalid_ignition_event_is_rejected() {
        let result = parse(
            r#"
            [[component]]
            type = "body-tube"

            [component.ignition]
            event = "apogee"
            "#,
        )
        .into_assembly(None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn transition_radii_accept_numbers_and_auto() {
        let assembly = parse(
            r#"
            [[component]]
            type = "body-tube"
            outer-radius = 0.02

            [[component]]
            type = "transition"
            length = 0.05
            fore-radius = "auto"
            aft-radius = 0.03

            [[component]]
            type = "body-tube"
            "#,
        )
        .into_assembly(None)
        .unwrap();

        let ids = assembly.ids().to_vec();
        let neighbors = assembly.neighbors(ids[1]).unwrap();
        let transition = assembly.component(ids[1]).unwrap();
        assert_eq!(transition.fore_radius(&neighbors), 0.02);
        assert_eq!(transition.aft_radius(&neighbors), 0.03);
        assert_eq!(assembly.outer_radius(ids[2]), Some(0.03));
    }

    #[test]
    fn empty_definition_yields_empty_assembly() {
        let assembly = parse("").into_assembly(None).unwrap();
        assert!(assembly.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<PartialAssembly, _> = toml::from_str(
            r#"
            [[component]]
            type = "body-tube"
            diameter = 0.05
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bundled_demo_definition_builds() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        let catalog = PresetCatalog::load(&demos.join("estes-catalog.toml")).unwrap();
        let assembly = PartialAssembly::from_file(&demos.join("two-stage.toml"))
            .unwrap()
            .into_assembly(Some(&catalog))
            .unwrap();

        let ids = assembly.ids().to_vec();
        assert_eq!(ids.len(), 5);
        assert!(f64_approx_equal(assembly.outer_radius(ids[2]).unwrap(), 0.0124));
        assert!(f64_approx_equal(assembly.outer_radius(ids[4]).unwrap(), 0.0094));
    }

    #[test]
    fn from_file_reports_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[component]\ntype = ").unwrap();
        let result = PartialAssembly::from_file(&path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }
}
