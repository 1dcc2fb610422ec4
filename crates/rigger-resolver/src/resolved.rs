//! The output of configuration resolution.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use rigger_core::package::PackageOptions;
use rigger_core::runtime::Runtime;
use rigger_core::settings::Settings;

/// A validated, complete configuration. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfiguration {
    runtime: Runtime,
    runtime_version: String,
    settings: Settings,
    packages: BTreeMap<String, PackageOptions>,
}

impl ResolvedConfiguration {
    pub(crate) fn new(
        runtime: Runtime,
        runtime_version: String,
        settings: Settings,
        packages: BTreeMap<String, PackageOptions>,
    ) -> Self {
        Self {
            runtime,
            runtime_version,
            settings,
            packages,
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime
    }

    pub fn runtime_version(&self) -> &str {
        &self.runtime_version
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Final options of every declared package, keyed by package name.
    pub fn packages(&self) -> &BTreeMap<String, PackageOptions> {
        &self.packages
    }

    pub fn package(&self, name: &str) -> Option<&PackageOptions> {
        self.packages.get(name)
    }

    /// Deterministic identifier of this configuration: SHA-256 of its
    /// canonical text.
    ///
    /// Two configurations have the same id exactly when they are equal.
    pub fn package_id(&self) -> String {
        rigger_util::hash::sha256_bytes(self.canonical_text().as_bytes())
    }

    /// One `key=value` line per field. Every name and value is written as a
    /// quoted, escaped string literal, so no value can spill into the next
    /// field.
    fn canonical_text(&self) -> String {
        let mut out = String::new();
        let s = &self.settings;
        let _ = writeln!(out, "runtime={:?}", self.runtime.as_str());
        let _ = writeln!(out, "runtime_version={:?}", self.runtime_version);
        let _ = writeln!(out, "os={:?}", s.os);
        let _ = writeln!(out, "arch={:?}", s.arch);
        let _ = writeln!(out, "build_type={:?}", s.build_type);
        let _ = writeln!(out, "compiler={:?}", s.compiler.as_str());
        for (name, opts) in &self.packages {
            let _ = writeln!(out, "[{name:?}]");
            for (key, value) in opts.iter() {
                let _ = writeln!(out, "{key:?}={}:{:?}", value.kind(), value.to_string());
            }
        }
        out
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
