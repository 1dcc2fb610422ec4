//! Loading a recipe and everything needed to resolve it.

use std::path::{Path, PathBuf};

use rigger_core::config::GlobalConfig;
use rigger_core::recipe::Recipe;
use rigger_core::settings::{Compiler, Settings};
use rigger_core::RECIPE_FILE;
use rigger_resolver::{ConfigurationResolver, DependencyGraph, RawOptions, ResolvedConfiguration};
use rigger_util::errors::RiggerError;

/// Values given on the command line, taking precedence over the recipe.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub runtime: Option<String>,
    pub runtime_version: Option<String>,
    pub compiler: Option<Compiler>,
}

/// A loaded recipe with its graph, raw options, and resolver.
pub struct RecipeContext {
    pub path: PathBuf,
    pub recipe: Recipe,
    pub graph: DependencyGraph,
    pub raw: RawOptions,
    pub resolver: ConfigurationResolver,
}

/// Find the recipe to operate on.
///
/// An explicit path is taken relative to `cwd`; otherwise `Rigger.toml` is
/// searched for in `cwd` and its ancestors.
pub fn locate_recipe(cwd: &Path, explicit: Option<&Path>) -> miette::Result<PathBuf> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if !path.is_file() {
            return Err(RiggerError::Manifest {
                message: format!("Recipe not found: {}", path.display()),
            }
            .into());
        }
        return Ok(path);
    }
    rigger_util::fs::find_ancestor_with(cwd, RECIPE_FILE)
        .map(|dir| dir.join(RECIPE_FILE))
        .ok_or_else(|| {
            RiggerError::Manifest {
                message: format!("Could not find {RECIPE_FILE} in this directory or any parent"),
            }
            .into()
        })
}

/// Settings precedence: command line, then recipe, then global config, then host.
fn effective_settings(recipe: &Recipe, overrides: &Overrides, global: &GlobalConfig) -> Settings {
    let host = Settings::detect();
    let configured = global.toolchain.compiler;
    match configured {
        Some(compiler) if recipe.settings.compiler.is_none() && overrides.compiler.is_none() => {
            tracing::debug!(%compiler, "using compiler from global config");
        }
        None if recipe.settings.compiler.is_none()
            && recipe.settings.os.is_none()
            && overrides.compiler.is_none() =>
        {
            tracing::warn!(
                compiler = %host.compiler,
                "no compiler configured; assuming the host default"
            );
        }
        _ => {}
    }

    let mut settings = recipe.settings.complete(&host, configured);
    if let Some(compiler) = overrides.compiler {
        settings.compiler = compiler;
    }
    settings
}

impl RecipeContext {
    /// Load the recipe at `path` and prepare it for resolution.
    pub fn load(path: &Path, overrides: &Overrides, global: &GlobalConfig) -> miette::Result<Self> {
        tracing::debug!(path = %path.display(), "loading recipe");
        let recipe = Recipe::from_path(path)?;
        let graph = DependencyGraph::from_recipe(&recipe)?;

        let runtime = overrides
            .runtime
            .clone()
            .or_else(|| recipe.options.runtime.clone())
            .unwrap_or_default();
        let runtime_version = overrides
            .runtime_version
            .clone()
            .or_else(|| recipe.options.runtime_version.clone())
            .unwrap_or_default();
        if overrides.runtime.is_some() || overrides.runtime_version.is_some() {
            tracing::debug!(%runtime, %runtime_version, "runtime overridden on the command line");
        }

        let settings = effective_settings(&recipe, overrides, global);
        let mut raw = RawOptions::new(runtime, runtime_version, settings);
        raw.packages = recipe.options.packages.clone();

        let resolver = ConfigurationResolver::new(recipe.effective_policy());

        Ok(Self {
            path: path.to_path_buf(),
            recipe,
            graph,
            raw,
            resolver,
        })
    }

    /// Resolve the loaded recipe.
    pub fn resolve(&self) -> miette::Result<ResolvedConfiguration> {
        let resolved = self.resolver.resolve(&self.raw, &self.graph)?;
        tracing::info!(
            package = %self.recipe.package.name,
            runtime = %resolved.runtime(),
            packages = resolved.packages().len(),
            "configuration resolved"
        );
        Ok(resolved)
    }

    /// `name v{version}` of the recipe's own package.
    pub fn label(&self) -> String {
        format!("{} v{}", self.recipe.package.name, self.recipe.package.version)
    }
}
