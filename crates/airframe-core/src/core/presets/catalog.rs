use super::preset::{ComponentPreset, PresetKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default, rename = "preset")]
    presets: Vec<ComponentPreset>,
}

/// Presets indexed by part number, iterated in part number order.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: BTreeMap<String, ComponentPreset>,
}

impl PresetCatalog {
    pub fn load(path: &Path) -> Result<Self, PresetLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PresetLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let catalog = Self::parse(&content, &path.to_string_lossy())?;
        debug!(
            "Loaded {} component presets from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    /// Parses catalog content. `origin` only labels error messages.
    pub fn parse(content: &str, origin: &str) -> Result<Self, PresetLoadError> {
        let file: CatalogFile = toml::from_str(content).map_err(|e| PresetLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;

        let mut presets = BTreeMap::new();
        for preset in file.presets {
            if presets.contains_key(&preset.part_number) {
                return Err(PresetLoadError::DuplicatePartNumber {
                    path: origin.to_string(),
                    part_number: preset.part_number,
                });
            }
            presets.insert(preset.part_number.clone(), preset);
        }
        Ok(Self { presets })
    }

    pub fn get(&self, part_number: &str) -> Option<&ComponentPreset> {
        self.presets.get(part_number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentPreset> {
        self.presets.values()
    }

    pub fn of_kind(&self, kind: PresetKind) -> impl Iterator<Item = &ComponentPreset> {
        self.iter().filter(move |preset| preset.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum PresetLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Duplicate part number '{part_number}' in '{path}'")]
    DuplicatePartNumber { path: String, part_number: String },
}
