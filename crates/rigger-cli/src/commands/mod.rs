//! Command dispatch and handler modules.

mod check;
mod resolve;
mod tree;

use miette::Result;
use rigger_ops::context::Overrides;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Resolve {
            recipe,
            runtime,
            runtime_version,
            compiler,
            format,
            output,
        } => resolve::exec(
            recipe,
            Overrides {
                runtime,
                runtime_version,
                compiler,
            },
            format,
            output,
        ),
        Command::Check {
            recipe,
            runtime,
            runtime_version,
            compiler,
        } => check::exec(
            recipe,
            Overrides {
                runtime,
                runtime_version,
                compiler,
            },
        ),
        Command::Tree { recipe, depth, why } => tree::exec(recipe, depth, why),
    }
}
