//! Configuration resolution engine: validates recipe options, applies the
//! static-only and PIC policy to the declared dependency graph, and produces
//! an immutable resolved configuration.
//!
//! Resolution is a pure function of its inputs. Nothing in this crate
//! touches the filesystem, spawns processes, or logs.

pub mod defaults;
pub mod error;
pub mod graph;
pub mod resolved;
pub mod resolver;

pub use error::ConfigError;
pub use graph::DependencyGraph;
pub use resolved::ResolvedConfiguration;
pub use resolver::{ConfigurationResolver, RawOptions};
