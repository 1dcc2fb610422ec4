//! CLI argument definitions for Rigger.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rigger_core::config::OutputFormat;
use rigger_core::settings::Compiler;

#[derive(Parser, Debug)]
#[command(
    name = "rigger",
    version,
    about = "Resolve native dependency build configurations for Node.js and Electron addons",
    long_about = "Rigger reads a Rigger.toml recipe, validates the target runtime, and applies \
                  static-linking and position-independent-code policy to every native dependency."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the recipe and print the configuration
    Resolve {
        /// Path to the recipe (defaults to the nearest Rigger.toml)
        #[arg(long)]
        recipe: Option<PathBuf>,
        /// Target runtime: node or electron
        #[arg(long)]
        runtime: Option<String>,
        /// Target runtime version
        #[arg(long)]
        runtime_version: Option<String>,
        /// Compiler to resolve for: gcc, clang, apple-clang, msvc
        #[arg(long)]
        compiler: Option<Compiler>,
        /// Output format: toml or json
        #[arg(long)]
        format: Option<OutputFormat>,
        /// Write the configuration to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate the recipe without printing the configuration
    Check {
        /// Path to the recipe (defaults to the nearest Rigger.toml)
        #[arg(long)]
        recipe: Option<PathBuf>,
        /// Target runtime: node or electron
        #[arg(long)]
        runtime: Option<String>,
        /// Target runtime version
        #[arg(long)]
        runtime_version: Option<String>,
        /// Compiler to resolve for
        #[arg(long)]
        compiler: Option<Compiler>,
    },

    /// Display the dependency tree with policy marks
    Tree {
        /// Path to the recipe (defaults to the nearest Rigger.toml)
        #[arg(long)]
        recipe: Option<PathBuf>,
        /// Maximum depth
        #[arg(long)]
        depth: Option<usize>,
        /// Explain why a package is included
        #[arg(long)]
        why: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
