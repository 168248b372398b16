//! Naming-convention enumeration and per-category statistics.
//!
//! Like the file-type taxonomy, the serialized convention names are a stable
//! contract: downstream rule templates key off strings such as `"camelCase"`
//! and `"snake_case"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Conventions
// =============================================================================

/// The closed set of recognized naming conventions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum NamingConvention {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "lowercase")]
    Lowercase,
    #[serde(rename = "UPPERCASE")]
    Uppercase,
    #[serde(rename = "unknown")]
    Unknown,
}

impl NamingConvention {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingConvention::CamelCase => "camelCase",
            NamingConvention::PascalCase => "PascalCase",
            NamingConvention::SnakeCase => "snake_case",
            NamingConvention::KebabCase => "kebab-case",
            NamingConvention::Lowercase => "lowercase",
            NamingConvention::Uppercase => "UPPERCASE",
            NamingConvention::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The winning convention of one name population, or `Mixed` when no single
/// convention reaches the dominance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominant {
    Convention(NamingConvention),
    Mixed,
}

impl Dominant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dominant::Convention(c) => c.as_str(),
            Dominant::Mixed => "mixed",
        }
    }
}

impl Serialize for Dominant {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Dominant {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let dominant = match s.as_str() {
            "mixed" => Dominant::Mixed,
            "camelCase" => Dominant::Convention(NamingConvention::CamelCase),
            "PascalCase" => Dominant::Convention(NamingConvention::PascalCase),
            "snake_case" => Dominant::Convention(NamingConvention::SnakeCase),
            "kebab-case" => Dominant::Convention(NamingConvention::KebabCase),
            "lowercase" => Dominant::Convention(NamingConvention::Lowercase),
            "UPPERCASE" => Dominant::Convention(NamingConvention::Uppercase),
            "unknown" => Dominant::Convention(NamingConvention::Unknown),
            other => {
                return Err(serde::de::Error::custom(format!(
                    "unrecognized dominant convention: {}",
                    other
                )));
            }
        };
        Ok(dominant)
    }
}

// =============================================================================
// Categories and Stats
// =============================================================================

/// The name populations profiled independently of one another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NamingCategory {
    Files,
    Directories,
    Variables,
    Functions,
    Classes,
    Components,
}

impl NamingCategory {
    pub const ALL: [NamingCategory; 6] = [
        NamingCategory::Files,
        NamingCategory::Directories,
        NamingCategory::Variables,
        NamingCategory::Functions,
        NamingCategory::Classes,
        NamingCategory::Components,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingCategory::Files => "files",
            NamingCategory::Directories => "directories",
            NamingCategory::Variables => "variables",
            NamingCategory::Functions => "functions",
            NamingCategory::Classes => "classes",
            NamingCategory::Components => "components",
        }
    }
}

impl std::fmt::Display for NamingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classification tally for one category of names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamingStat {
    pub counts: BTreeMap<NamingConvention, usize>,
    pub total: usize,
    /// `None` while the population is empty.
    pub dominant: Option<Dominant>,
}

impl NamingStat {
    /// Share of the population covered by the dominant convention, when one
    /// exists (including `Mixed` populations, where it is the best share).
    pub fn dominant_share(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let best = self.counts.values().copied().max().unwrap_or(0);
        Some(best as f64 / self.total as f64)
    }
}
