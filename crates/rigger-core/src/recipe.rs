use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::option::OptionValue;
use crate::policy::Policy;
use crate::reference::PackageReference;
use crate::settings::PartialSettings;

/// The parsed representation of a `Rigger.toml` file.
///
/// Unknown keys in any table are rejected so that a misspelled section or
/// option cannot silently disable part of the policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    pub package: PackageMetadata,

    #[serde(default)]
    pub settings: PartialSettings,

    #[serde(default)]
    pub options: RecipeOptions,

    /// `package -> ordered dependency names`.
    #[serde(default)]
    pub dependencies: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    pub policy: Option<Policy>,
}

/// Package identity and pinned requirements from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageMetadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requires: Vec<PackageReference>,
}

/// Option inputs from the `[options]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecipeOptions {
    #[serde(default)]
    pub runtime: Option<String>,

    #[serde(default)]
    pub runtime_version: Option<String>,

    /// Raw per-package overrides from `[options.packages.<name>]`.
    #[serde(default)]
    pub packages: BTreeMap<String, BTreeMap<String, OptionValue>>,
}

impl Recipe {
    /// Load and parse a `Rigger.toml` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            rigger_util::errors::RiggerError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        content.parse()
    }

    /// The declared dependency map with the recipe's own package as root.
    ///
    /// The root depends on every `requires` entry, in order; entries of
    /// `[dependencies]` add the remaining edges. Duplicate edges are dropped.
    pub fn dependency_map(&self) -> BTreeMap<String, Vec<String>> {
        let mut map = self.dependencies.clone();
        let root = map.entry(self.package.name.clone()).or_default();
        let mut edges: Vec<String> = self
            .package
            .requires
            .iter()
            .map(|r| r.name.clone())
            .collect();
        for dep in root.drain(..) {
            if !edges.contains(&dep) {
                edges.push(dep);
            }
        }
        *root = edges;
        map
    }

    /// The recipe's policy, or the libtorrent addon policy when none is given.
    pub fn effective_policy(&self) -> Policy {
        self.policy.clone().unwrap_or_else(Policy::libtorrent_addon)
    }
}

/// Parse a `Rigger.toml` from a string.
impl FromStr for Recipe {
    type Err = miette::Report;

    fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            rigger_util::errors::RiggerError::Manifest {
                message: format!("Failed to parse Rigger.toml: {e}"),
            }
            .into()
        })
    }
}
