//! Operation: display the declared dependency graph with policy marks.

use std::path::Path;

use rigger_core::config::GlobalConfig;

use crate::context::{locate_recipe, Overrides, RecipeContext};

/// Options for `rigger tree`.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Explain which packages depend on this one instead of printing the tree.
    pub why: Option<String>,
}

/// Build the tree text for an already loaded recipe.
///
/// Packages forced static are marked `[static]`; packages that will get
/// `fPIC` under the effective compiler are marked `[fPIC]`.
pub fn tree_text(ctx: &RecipeContext, depth: Option<usize>) -> String {
    let policy = ctx.resolver.policy();
    let wants_pic = !ctx.raw.settings.compiler.defaults_to_pic();
    let annotate = |name: &str| {
        let mut marks = Vec::new();
        if policy.static_only.contains(name) {
            marks.push("static");
        }
        if wants_pic && policy.pic.contains(name) {
            marks.push("fPIC");
        }
        if marks.is_empty() {
            String::new()
        } else {
            format!(" [{}]", marks.join(", "))
        }
    };
    ctx.graph.print_tree(depth, &annotate)
}

/// Print the dependency tree of the recipe.
pub fn tree(cwd: &Path, recipe: Option<&Path>, opts: &TreeOptions) -> miette::Result<()> {
    let global = GlobalConfig::load()?;
    let path = locate_recipe(cwd, recipe)?;
    let ctx = RecipeContext::load(&path, &Overrides::default(), &global)?;
    tracing::debug!(path = %ctx.path.display(), packages = ctx.graph.len(), "graph loaded");

    if let Some(ref target) = opts.why {
        if !ctx.graph.contains(target) {
            println!("Package '{target}' is not declared in {}.", ctx.label());
            return Ok(());
        }
        let dependents = ctx.graph.dependents_of(target);
        if dependents.is_empty() {
            println!("{target} is a top-level package.");
        } else {
            println!("{target} is required by:");
            for dependent in dependents {
                println!("  {dependent}");
            }
        }
        return Ok(());
    }

    print!("{}", tree_text(&ctx, opts.depth));
    Ok(())
}
