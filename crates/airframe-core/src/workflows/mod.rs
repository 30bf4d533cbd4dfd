//! # Workflows Module
//!
//! High-level entry points operating on a whole [`Assembly`](crate::core::models::assembly::Assembly).
//!
//! ## Overview
//!
//! A workflow resolves the automatic radii of every component in the chain once and
//! collects the derived geometry, mass properties and motor mount state into a plain
//! report that front ends can render without knowing the component models.
//!
//! ## Architecture
//!
//! - **Inspection Workflow** ([`inspect`]) - Per component radii, mass properties and motor
//!   positions for a selected flight configuration.

pub mod inspect;
