//! Option values: the closed set of things an option can hold.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A value outside an enumerated option's allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not one of [{}]", allowed.join(", "))]
pub struct ChoiceError {
    pub value: String,
    pub allowed: Vec<String>,
}

/// An enumerated option value. Always a member of `allowed`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Choice {
    value: &'static str,
    allowed: &'static [&'static str],
}

impl Choice {
    /// Select `value` from `allowed`, failing if it is not a member.
    pub fn new(value: &str, allowed: &'static [&'static str]) -> Result<Self, ChoiceError> {
        match allowed.iter().find(|candidate| **candidate == value) {
            Some(&found) => Ok(Self {
                value: found,
                allowed,
            }),
            None => Err(ChoiceError {
                value: value.to_string(),
                allowed: allowed.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    pub fn value(&self) -> &'static str {
        self.value
    }

    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }
}

/// The value of a single option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
    Choice(Choice),
}

impl OptionValue {
    /// Build an enumerated value, enforcing membership in `allowed`.
    pub fn choice(value: &str, allowed: &'static [&'static str]) -> Result<Self, ChoiceError> {
        Choice::new(value, allowed).map(Self::Choice)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Choice(c) => Some(c.value()),
            Self::Bool(_) => None,
        }
    }

    /// Short name of the variant, used in type mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::Choice(_) => "choice",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Choice(c) => write!(f, "{}", c.value()),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Choice(c) => serializer.serialize_str(c.value()),
        }
    }
}

/// Wire form of an option value as it appears in a recipe.
///
/// Choices cannot be written directly; they only arise from schema checks.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOptionValue {
    Bool(bool),
    Str(String),
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawOptionValue::deserialize(deserializer)? {
            RawOptionValue::Bool(b) => Self::Bool(b),
            RawOptionValue::Str(s) => Self::Str(s),
        })
    }
}
