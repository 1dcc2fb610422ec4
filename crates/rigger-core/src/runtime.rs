//! The JavaScript runtime a binding is built for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::option::{Choice, ChoiceError};

/// Supported runtimes for the native binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runtime {
    Node,
    Electron,
}

impl Runtime {
    /// Names accepted for the `runtime` option, in declaration order.
    pub const NAMES: &'static [&'static str] = &["node", "electron"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Electron => "electron",
        }
    }
}

impl FromStr for Runtime {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = Choice::new(s, Self::NAMES)?;
        Ok(match choice.value() {
            "node" => Self::Node,
            _ => Self::Electron,
        })
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
