//! Pinned package references: `name/version@user/channel`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A reference string that is not `name/version[@user/channel]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid package reference '{input}': {reason}")]
pub struct ReferenceError {
    pub input: String,
    pub reason: &'static str,
}

/// A pinned requirement on an upstream package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageReference {
    pub name: String,
    pub version: String,
    pub user: Option<String>,
    pub channel: Option<String>,
}

impl PackageReference {
    /// Parse `"name/version"` or `"name/version@user/channel"`.
    pub fn parse(s: &str) -> Result<Self, ReferenceError> {
        let fail = |reason| ReferenceError {
            input: s.to_string(),
            reason,
        };

        let (pkg, origin) = match s.split_once('@') {
            Some((pkg, origin)) => (pkg, Some(origin)),
            None => (s, None),
        };

        let (name, version) = pkg.split_once('/').ok_or_else(|| fail("missing '/version'"))?;
        if name.is_empty() {
            return Err(fail("empty name"));
        }
        if version.is_empty() || version.contains('/') {
            return Err(fail("malformed version"));
        }

        let (user, channel) = match origin {
            Some(origin) => {
                let (user, channel) = origin
                    .split_once('/')
                    .ok_or_else(|| fail("expected '@user/channel'"))?;
                if user.is_empty() || channel.is_empty() || channel.contains('/') {
                    return Err(fail("expected '@user/channel'"));
                }
                (Some(user.to_string()), Some(channel.to_string()))
            }
            None => (None, None),
        };

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            user,
            channel,
        })
    }
}

impl FromStr for PackageReference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackageReference {
    type Error = ReferenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PackageReference> for String {
    fn from(r: PackageReference) -> Self {
        r.to_string()
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)?;
        if let (Some(user), Some(channel)) = (&self.user, &self.channel) {
            write!(f, "@{user}/{channel}")?;
        }
        Ok(())
    }
}
