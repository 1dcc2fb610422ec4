use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use crate::option::OptionValue;

/// Build as a shared library (`false` means a static archive).
pub const SHARED: &str = "shared";
/// Compile with position-independent code.
pub const FPIC: &str = "fPIC";
/// Keep deprecated API functions in the build.
pub const DEPRECATED_FUNCTIONS: &str = "deprecated_functions";

/// Every per-package option key a recipe may set. All are booleans.
pub const RECOGNIZED_KEYS: &[&str] = &[SHARED, FPIC, DEPRECATED_FUNCTIONS];

/// Returns `true` if `key` is a recognised per-package option.
pub fn is_recognized_key(key: &str) -> bool {
    RECOGNIZED_KEYS.contains(&key)
}

/// The options of a single package, keyed by option name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    name: String,
    values: BTreeMap<String, OptionValue>,
}

impl PackageOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Name of the package these options belong to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    /// Set `key`, returning the previous value if there was one.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// The package name is the key of the enclosing table, so only the values are written.
impl Serialize for PackageOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}
