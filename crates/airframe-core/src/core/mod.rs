//! # Core Module
//!
//! Fundamental building blocks of the airframe model.
//!
//! ## Architecture
//!
//! - **Component Representation** ([`models`]) - Body tubes, transitions, the assembly chain
//!   and the motor mount delegate
//! - **Presets** ([`presets`]) - Manufacturer component presets and the TOML catalog loader
//! - **Display Strings** ([`text`]) - Translator handles for component names
//! - **Utilities** ([`utils`]) - Cylinder formulas and tolerant floating point comparison
//!
//! ## Units
//!
//! All lengths are in meters, masses in kilograms and densities in kg/m³. Positions are
//! measured along the component axis from its fore end.

pub mod models;
pub mod presets;
pub mod text;
pub mod utils;
