//! Default per-package option values.

use rigger_core::package::{PackageOptions, DEPRECATED_FUNCTIONS, FPIC, SHARED};

/// Value every declared package starts with before overrides and policy.
pub const DEFAULT_OPTIONS: &[(&str, bool)] = &[
    (SHARED, false),
    (FPIC, false),
    (DEPRECATED_FUNCTIONS, true),
];

/// Options for `package` populated from [`DEFAULT_OPTIONS`].
pub fn default_package_options(package: &str) -> PackageOptions {
    let mut opts = PackageOptions::new(package);
    for &(key, value) in DEFAULT_OPTIONS {
        opts.set(key, value);
    }
    opts
}
