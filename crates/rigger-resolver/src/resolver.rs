//! Configuration resolution: scalar validation, per-package overrides,
//! static-only and PIC policy enforcement.

use std::collections::BTreeMap;

use rigger_core::option::OptionValue;
use rigger_core::package::{is_recognized_key, PackageOptions, FPIC, SHARED};
use rigger_core::policy::Policy;
use rigger_core::runtime::Runtime;
use rigger_core::settings::Settings;

use crate::defaults::default_package_options;
use crate::error::ConfigError;
use crate::graph::DependencyGraph;
use crate::resolved::ResolvedConfiguration;

/// Raw, unvalidated option input to a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub runtime: String,
    pub runtime_version: String,
    pub settings: Settings,
    /// Requested per-package options, `package -> option -> value`.
    pub packages: BTreeMap<String, BTreeMap<String, OptionValue>>,
}

impl RawOptions {
    pub fn new(
        runtime: impl Into<String>,
        runtime_version: impl Into<String>,
        settings: Settings,
    ) -> Self {
        Self {
            runtime: runtime.into(),
            runtime_version: runtime_version.into(),
            settings,
            packages: BTreeMap::new(),
        }
    }

    /// Request `package.option = value`.
    pub fn with_package_option(
        mut self,
        package: &str,
        option: &str,
        value: impl Into<OptionValue>,
    ) -> Self {
        self.packages
            .entry(package.to_string())
            .or_default()
            .insert(option.to_string(), value.into());
        self
    }
}

/// Turns raw options into a [`ResolvedConfiguration`] under a fixed [`Policy`].
#[derive(Debug, Clone)]
pub struct ConfigurationResolver {
    policy: Policy,
}

impl Default for ConfigurationResolver {
    fn default() -> Self {
        Self::new(Policy::libtorrent_addon())
    }
}

impl ConfigurationResolver {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Resolve `input` against the packages declared in `graph`.
    ///
    /// Returns the first error encountered; no partial configuration is
    /// ever produced.
    pub fn resolve(
        &self,
        input: &RawOptions,
        graph: &DependencyGraph,
    ) -> Result<ResolvedConfiguration, ConfigError> {
        let (runtime, runtime_version) = validate_scalars(input)?;
        self.validate_policy(graph)?;

        let mut packages: BTreeMap<String, PackageOptions> = graph
            .packages()
            .into_iter()
            .map(|name| (name.to_string(), default_package_options(name)))
            .collect();

        apply_overrides(&mut packages, &input.packages)?;
        self.enforce(&mut packages, &input.settings);

        Ok(ResolvedConfiguration::new(
            runtime,
            runtime_version,
            input.settings.clone(),
            packages,
        ))
    }

    fn validate_policy(&self, graph: &DependencyGraph) -> Result<(), ConfigError> {
        let sections: [(&str, Vec<&String>); 3] = [
            ("policy static-only", self.policy.static_only.iter().collect()),
            ("policy pic", self.policy.pic.iter().collect()),
            ("policy forced", self.policy.forced.keys().collect()),
        ];
        for (section, names) in sections {
            if let Some(missing) = names.into_iter().find(|n| !graph.contains(n)) {
                return Err(ConfigError::UnknownPackage {
                    package: missing.clone(),
                    referenced_by: section.to_string(),
                });
            }
        }
        for (package, options) in &self.policy.forced {
            if let Some(option) = options.keys().find(|k| !is_recognized_key(k)) {
                return Err(ConfigError::UnknownOption {
                    package: package.clone(),
                    option: option.clone(),
                });
            }
        }
        Ok(())
    }

    /// Apply the policy. Forced values go first so that static-only and
    /// PIC settings always hold in the result.
    fn enforce(&self, packages: &mut BTreeMap<String, PackageOptions>, settings: &Settings) {
        for (package, options) in &self.policy.forced {
            if let Some(opts) = packages.get_mut(package) {
                for (key, value) in options {
                    opts.set(key.as_str(), *value);
                }
            }
        }

        for package in &self.policy.static_only {
            if let Some(opts) = packages.get_mut(package) {
                opts.set(SHARED, false);
            }
        }

        if !settings.compiler.defaults_to_pic() {
            for package in &self.policy.pic {
                if let Some(opts) = packages.get_mut(package) {
                    opts.set(FPIC, true);
                }
            }
        }
    }
}

/// `runtime_version` is checked before `runtime`.
fn validate_scalars(input: &RawOptions) -> Result<(Runtime, String), ConfigError> {
    if input.runtime_version.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "runtime_version".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    let runtime = input
        .runtime
        .parse::<Runtime>()
        .map_err(|e| ConfigError::from_choice("runtime", e))?;
    Ok((runtime, input.runtime_version.clone()))
}

fn apply_overrides(
    packages: &mut BTreeMap<String, PackageOptions>,
    overrides: &BTreeMap<String, BTreeMap<String, OptionValue>>,
) -> Result<(), ConfigError> {
    for (package, options) in overrides {
        let opts = packages
            .get_mut(package)
            .ok_or_else(|| ConfigError::UnknownPackage {
                package: package.clone(),
                referenced_by: "options".to_string(),
            })?;
        for (key, value) in options {
            if !is_recognized_key(key) {
                return Err(ConfigError::UnknownOption {
                    package: package.clone(),
                    option: key.clone(),
                });
            }
            let flag = value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
                option: format!("{package}.{key}"),
                reason: format!("expected a boolean, got {} '{value}'", value.kind()),
            })?;
            opts.set(key.as_str(), flag);
        }
    }
    Ok(())
}
