use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Forced settings applied to named packages during resolution.
///
/// Every package a policy names must be declared in the dependency graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Policy {
    /// Packages that always build as static archives.
    #[serde(default)]
    pub static_only: BTreeSet<String>,

    /// Packages built with `fPIC` when the toolchain does not default to PIC.
    #[serde(default)]
    pub pic: BTreeSet<String>,

    /// Fixed boolean options, `package -> option -> value`.
    #[serde(default)]
    pub forced: BTreeMap<String, BTreeMap<String, bool>>,
}

impl Policy {
    /// The policy for a Node/Electron addon over libtorrent: the library and
    /// its native dependencies link statically, the ones that end up inside
    /// the addon's shared object get PIC, and libtorrent drops its
    /// deprecated API.
    pub fn libtorrent_addon() -> Self {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        let mut forced = BTreeMap::new();
        forced.insert(
            "Libtorrent".to_string(),
            BTreeMap::from([(crate::package::DEPRECATED_FUNCTIONS.to_string(), false)]),
        );
        Self {
            static_only: names(&["Libtorrent", "Boost", "zlib", "bzip2", "OpenSSL"]),
            pic: names(&["Libtorrent", "Boost", "bzip2"]),
            forced,
        }
    }
}
