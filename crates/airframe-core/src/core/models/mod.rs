//! # Core Models Module
//!
//! Data structures describing the coaxial components of an airframe and the chain
//! they are arranged in.
//!
//! ## Key Components
//!
//! - [`body_tube`] - Cylindrical body segment with automatic radius and motor mount
//! - [`transition`] - Conical transition (and nose cone) with independent fore/aft radii
//! - [`component`] - The chain-eligible component variants and the component kind taxonomy
//! - [`symmetric`] - Front/rear auto radius contributions and the neighbor query interface
//! - [`assembly`] - Ordered, mutable chain of symmetric components
//! - [`mount`] - Motor mount delegate storing per flight configuration motor assignments
//! - [`motor`] - Motors, motor configurations and ignition events
//! - [`material`] - Bulk material density model
//! - [`change`] - Classification of the changes reported by setters
//! - [`ids`] - Stable identifiers handed out by the assembly
//!
//! ## Usage
//!
//! ```ignore
//! use airframe::core::models::{assembly::Assembly, body_tube::BodyTube};
//!
//! let mut assembly = Assembly::new();
//! let front = assembly.push(BodyTube::with_dimensions(0.3, 0.0125));
//! let rear = assembly.push(BodyTube::new());
//!
//! // The automatic tube picks up the radius of the explicit tube in front of it.
//! assert_eq!(assembly.outer_radius(rear), Some(0.0125));
//! ```

pub mod assembly;
pub mod body_tube;
pub mod change;
pub mod component;
pub mod ids;
pub mod material;
pub mod motor;
pub mod mount;
pub mod symmetric;
pub mod transition;
