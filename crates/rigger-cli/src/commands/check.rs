//! Check command implementation.

use std::path::PathBuf;

use miette::Result;

use rigger_ops::context::Overrides;

pub fn exec(recipe: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let cwd = std::env::current_dir().map_err(rigger_util::errors::RiggerError::Io)?;
    rigger_ops::ops_check::check(&cwd, recipe.as_deref(), &overrides).map(|_| ())
}
