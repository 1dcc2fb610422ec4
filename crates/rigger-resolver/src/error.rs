use miette::Diagnostic;
use thiserror::Error;

use rigger_core::option::ChoiceError;

/// Why a configuration could not be resolved.
///
/// Every variant is fatal to the current resolution; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ConfigError {
    /// An enumerated option was given a value outside its allowed set.
    #[error("Invalid value '{value}' for option '{option}': expected one of [{allowed}]")]
    #[diagnostic(code(rigger::invalid_choice))]
    InvalidChoice {
        option: String,
        value: String,
        allowed: String,
    },

    /// An option value is present but unusable.
    #[error("Invalid {option} value: {reason}")]
    #[diagnostic(code(rigger::invalid_value))]
    InvalidValue { option: String, reason: String },

    /// A package was referenced that the dependency graph does not declare.
    #[error("Unknown package '{package}' referenced by {referenced_by}")]
    #[diagnostic(
        code(rigger::unknown_package),
        help("Declare the package under [package].requires or [dependencies]")
    )]
    UnknownPackage {
        package: String,
        referenced_by: String,
    },

    /// An option key outside the recognised per-package schema.
    #[error("Unknown option '{option}' for package '{package}'")]
    #[diagnostic(
        code(rigger::unknown_option),
        help("Recognised options are: shared, fPIC, deprecated_functions")
    )]
    UnknownOption { package: String, option: String },

    /// The declared dependencies loop back on themselves.
    #[error("Dependency cycle detected involving '{package}'")]
    #[diagnostic(code(rigger::dependency_cycle))]
    DependencyCycle { package: String },
}

impl ConfigError {
    pub(crate) fn from_choice(option: &str, err: ChoiceError) -> Self {
        Self::InvalidChoice {
            option: option.to_string(),
            value: err.value,
            allowed: err.allowed.join(", "),
        }
    }
}
