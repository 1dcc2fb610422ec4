//! Operation: validate a recipe without emitting a configuration.

use std::path::Path;

use rigger_core::config::GlobalConfig;

use crate::context::{locate_recipe, Overrides, RecipeContext};

/// Resolve the recipe and report whether it is valid.
///
/// Returns the number of packages in the resolved configuration.
pub fn check(cwd: &Path, recipe: Option<&Path>, overrides: &Overrides) -> miette::Result<usize> {
    let global = GlobalConfig::load()?;
    let path = locate_recipe(cwd, recipe)?;
    let ctx = RecipeContext::load(&path, overrides, &global)?;

    rigger_util::progress::status("Checking", &ctx.label());
    let resolved = ctx.resolve()?;
    let count = resolved.packages().len();

    println!(
        "{}: configuration is valid ({count} packages, compiler {})",
        ctx.label(),
        resolved.settings().compiler
    );
    Ok(count)
}
