//! Operation: resolve a recipe and emit the resulting configuration.

use std::path::{Path, PathBuf};

use serde::Serialize;

use rigger_core::config::{GlobalConfig, OutputFormat};
use rigger_resolver::ResolvedConfiguration;
use rigger_util::errors::RiggerError;

use crate::context::{locate_recipe, Overrides, RecipeContext};

/// Options for `rigger resolve`.
#[derive(Debug, Default)]
pub struct ResolveOptions {
    /// Recipe path; searched for from the working directory when absent.
    pub recipe: Option<PathBuf>,
    pub overrides: Overrides,
    /// Output format; falls back to the global config.
    pub format: Option<OutputFormat>,
    /// Write the rendering here instead of stdout.
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Rendered<'a> {
    package_id: String,
    #[serde(flatten)]
    config: &'a ResolvedConfiguration,
}

/// Render a resolved configuration, including its package id.
pub fn render(resolved: &ResolvedConfiguration, format: OutputFormat) -> miette::Result<String> {
    let id = resolved.package_id();
    match format {
        OutputFormat::Toml => {
            let body = resolved.to_toml().map_err(|e| RiggerError::Generic {
                message: format!("Failed to render configuration as TOML: {e}"),
            })?;
            Ok(format!("# package-id: {id}\n{body}"))
        }
        OutputFormat::Json => {
            let rendered = Rendered {
                package_id: id,
                config: resolved,
            };
            let mut body = serde_json::to_string_pretty(&rendered).map_err(|e| {
                RiggerError::Generic {
                    message: format!("Failed to render configuration as JSON: {e}"),
                }
            })?;
            body.push('\n');
            Ok(body)
        }
    }
}

/// Resolve the recipe and print or write the configuration.
pub fn resolve(cwd: &Path, opts: &ResolveOptions) -> miette::Result<()> {
    let global = GlobalConfig::load()?;
    let path = locate_recipe(cwd, opts.recipe.as_deref())?;
    let ctx = RecipeContext::load(&path, &opts.overrides, &global)?;

    rigger_util::progress::status("Resolving", &ctx.label());
    let resolved = ctx.resolve()?;

    let format = opts.format.unwrap_or(global.output.format);
    let text = render(&resolved, format)?;

    match &opts.output {
        Some(out) => {
            let out = cwd.join(out);
            if out.is_file() {
                rigger_util::progress::status_warn("Overwriting", &out.display().to_string());
            }
            rigger_util::fs::write_creating_parents(&out, &text).map_err(RiggerError::Io)?;
            tracing::debug!(path = %out.display(), %format, "configuration written");
            rigger_util::progress::status_info("Wrote", &out.display().to_string());
        }
        None => print!("{text}"),
    }

    rigger_util::progress::status(
        "Resolved",
        &format!(
            "{} packages for {} {} (id {})",
            resolved.packages().len(),
            resolved.runtime(),
            resolved.runtime_version(),
            rigger_util::hash::short_id(&resolved.package_id(), 12),
        ),
    );
    Ok(())
}
