//! Shared utilities for Rigger.
//!
//! This crate provides cross-cutting concerns used by all other Rigger crates:
//! the unified error type, filesystem helpers, hashing, and terminal status
//! lines.

pub mod errors;
pub mod fs;
pub mod hash;
pub mod progress;
