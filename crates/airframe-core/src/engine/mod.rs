//! # Engine Module
//!
//! The edit layer between the plain component models and the workflows.
//!
//! ## Overview
//!
//! Component setters in [`crate::core`] only report what they changed. The engine turns those
//! reports into notifications: [`editor::AssemblyEditor`] applies edit commands to an
//! [`Assembly`](crate::core::models::assembly::Assembly), snapshots the neighbor radii a
//! command needs before borrowing the component mutably, and forwards every actual change
//! to a [`notify::ChangeNotifier`] injected by the caller.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Inspection settings and their builder
//! - **Editing** ([`editor`]) - Edit commands for body tubes and transitions
//! - **Notification** ([`notify`]) - Change events and the optional listener callback
//! - **Error Handling** ([`error`]) - Engine-level error type composing the model errors

pub mod config;
pub mod editor;
pub mod error;
pub mod notify;
