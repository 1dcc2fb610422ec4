//! Handler for `rigger resolve`.

use std::path::PathBuf;

use miette::Result;

use rigger_core::config::OutputFormat;
use rigger_ops::context::Overrides;
use rigger_ops::ops_resolve::{self, ResolveOptions};

pub fn exec(
    recipe: Option<PathBuf>,
    overrides: Overrides,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(rigger_util::errors::RiggerError::Io)?;

    let opts = ResolveOptions {
        recipe,
        overrides,
        format,
        output,
    };
    ops_resolve::resolve(&cwd, &opts)
}
