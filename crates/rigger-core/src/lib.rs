//! Core data types for Rigger.
//!
//! This crate defines the types a native dependency build descriptor is made
//! of: option values and per-package option maps, the runtime selection,
//! target settings and the compiler discriminator, pinned package references,
//! the static/PIC policy, `Rigger.toml` recipes, and the global user
//! configuration.
//!
//! This crate performs no resolution; see `rigger-resolver` for that.

/// File name of a recipe manifest.
pub const RECIPE_FILE: &str = "Rigger.toml";

pub mod config;
pub mod option;
pub mod package;
pub mod policy;
pub mod recipe;
pub mod reference;
pub mod runtime;
pub mod settings;
