use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all Rigger operations outside the resolver core.
#[derive(Debug, Error, Diagnostic)]
pub enum RiggerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed recipe (e.g. Rigger.toml).
    #[error("Recipe error: {message}")]
    #[diagnostic(help("Check your Rigger.toml for syntax errors"))]
    Manifest { message: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.rigger/config.toml"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
