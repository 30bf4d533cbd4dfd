//! # Presets Module
//!
//! Manufacturer component presets and the catalog they are loaded from.
//!
//! ## Key Components
//!
//! - [`preset`] - A single preset and the kinds of component it applies to
//! - [`catalog`] - TOML catalog loader indexing presets by part number
//!
//! ## Usage
//!
//! ```ignore
//! use airframe::core::presets::catalog::PresetCatalog;
//!
//! let catalog = PresetCatalog::load(Path::new("estes.toml"))?;
//! let bt50 = catalog.get("BT-50").unwrap();
//! tube.load_preset(bt50)?;
//! ```

pub mod catalog;
pub mod preset;
