//! Handler for `rigger tree`.

use std::path::PathBuf;

use miette::Result;

use rigger_ops::ops_tree::{self, TreeOptions};

pub fn exec(recipe: Option<PathBuf>, depth: Option<usize>, why: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir().map_err(rigger_util::errors::RiggerError::Io)?;
    let opts = TreeOptions { depth, why };
    ops_tree::tree(&cwd, recipe.as_deref(), &opts)
}
