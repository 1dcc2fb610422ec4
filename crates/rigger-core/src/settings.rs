//! Target settings: operating system, architecture, build type, and compiler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Compilers a recipe can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compiler {
    Gcc,
    Clang,
    AppleClang,
    #[serde(alias = "Visual Studio", alias = "visual-studio")]
    Msvc,
}

impl Compiler {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gcc => "gcc",
            Self::Clang => "clang",
            Self::AppleClang => "apple-clang",
            Self::Msvc => "msvc",
        }
    }

    /// Returns `true` if code produced by this toolchain is loadable from a
    /// shared object without asking for `-fPIC`.
    ///
    /// MSVC targets have no PIC switch; every other compiler here emits
    /// position-dependent code for static archives unless told otherwise.
    pub fn defaults_to_pic(&self) -> bool {
        matches!(self, Self::Msvc)
    }

    /// The usual compiler for a host operating system name.
    pub fn default_for_os(os: &str) -> Self {
        match os {
            "Windows" => Self::Msvc,
            "Macos" => Self::AppleClang,
            _ => Self::Gcc,
        }
    }
}

impl FromStr for Compiler {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gcc" => Ok(Self::Gcc),
            "clang" => Ok(Self::Clang),
            "apple-clang" => Ok(Self::AppleClang),
            "msvc" | "visual-studio" | "Visual Studio" => Ok(Self::Msvc),
            other => Err(format!(
                "unknown compiler '{other}' (expected gcc, clang, apple-clang or msvc)"
            )),
        }
    }
}

impl fmt::Display for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully determined settings a configuration is resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub os: String,
    pub arch: String,
    pub build_type: String,
    pub compiler: Compiler,
}

impl Settings {
    /// Settings describing the machine Rigger is running on.
    pub fn detect() -> Self {
        let os = host_os_name().to_string();
        Self {
            compiler: Compiler::default_for_os(&os),
            os,
            arch: std::env::consts::ARCH.to_string(),
            build_type: "Release".to_string(),
        }
    }
}

/// Settings as written in a recipe's `[settings]` table; any field may be left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub arch: Option<String>,
    #[serde(default)]
    pub build_type: Option<String>,
    #[serde(default)]
    pub compiler: Option<Compiler>,
}

impl PartialSettings {
    /// Fill the missing fields from `fallback`.
    ///
    /// A missing compiler is taken from `configured` (the user's global
    /// default) when set. Otherwise, when the OS is given, it is the usual
    /// compiler for that OS rather than the fallback's.
    pub fn complete(&self, fallback: &Settings, configured: Option<Compiler>) -> Settings {
        let os = self.os.clone().unwrap_or_else(|| fallback.os.clone());
        let compiler = match (self.compiler, configured, &self.os) {
            (Some(c), _, _) => c,
            (None, Some(c), _) => c,
            (None, None, Some(os)) => Compiler::default_for_os(os),
            (None, None, None) => fallback.compiler,
        };
        Settings {
            os,
            arch: self.arch.clone().unwrap_or_else(|| fallback.arch.clone()),
            build_type: self
                .build_type
                .clone()
                .unwrap_or_else(|| fallback.build_type.clone()),
            compiler,
        }
    }
}

fn host_os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Macos",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        _ => "Unknown",
    }
}
