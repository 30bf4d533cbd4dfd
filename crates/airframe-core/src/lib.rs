//! # Airframe Core Library
//!
//! Geometry and mass properties for the coaxial body components of a rocket airframe,
//! with automatic radius resolution along the chain of symmetric components.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture to keep concerns apart:
//!
//! - **[`core`]: The Foundation.** Plain data models (`BodyTube`, `Transition`, `Assembly`),
//!   the motor mount delegate, component presets and the pure geometric formulas. Every
//!   setter reports what it changed instead of firing events itself.
//!
//! - **[`engine`]: The Edit Layer.** Applies edit commands to an assembly and forwards each
//!   actual change to an injected `ChangeNotifier`, so caches held by consumers can be
//!   invalidated exactly once per change.
//!
//! - **[`workflows`]: The Public API.** High-level procedures such as inspecting a whole
//!   assembly and reporting the resolved radii and mass properties of every component.

pub mod core;
pub mod engine;
pub mod workflows;
