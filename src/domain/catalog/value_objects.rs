//! Catalog value objects

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// CNCF project lifecycle stage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum MaturityLevel {
    Sandbox,
    Incubating,
    Graduated,
}

impl MaturityLevel {
    /// Keyword scan order for heuristic matching: the most mature
    /// keyword wins when several appear in one value.
    pub const ALL: [MaturityLevel; 3] = [
        MaturityLevel::Graduated,
        MaturityLevel::Incubating,
        MaturityLevel::Sandbox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaturityLevel::Sandbox => "Sandbox",
            MaturityLevel::Incubating => "Incubating",
            MaturityLevel::Graduated => "Graduated",
        }
    }

    /// Lowercase keyword searched for in heterogeneous source values
    pub fn keyword(&self) -> &'static str {
        match self {
            MaturityLevel::Sandbox => "sandbox",
            MaturityLevel::Incubating => "incubating",
            MaturityLevel::Graduated => "graduated",
        }
    }

    /// Map a raw source value onto a canonical level.
    ///
    /// Trims and lowercases, accepts an exact keyword match first, then
    /// a substring match, and falls back to `Sandbox` for anything else.
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();

        for level in Self::ALL {
            if lowered == level.keyword() {
                return level;
            }
        }

        for level in Self::ALL {
            if lowered.contains(level.keyword()) {
                return level;
            }
        }

        tracing::debug!(value = raw, "unknown maturity level, defaulting to Sandbox");
        MaturityLevel::Sandbox
    }
}

impl Default for MaturityLevel {
    fn default() -> Self {
        MaturityLevel::Sandbox
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MaturityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sandbox" => Ok(MaturityLevel::Sandbox),
            "Incubating" => Ok(MaturityLevel::Incubating),
            "Graduated" => Ok(MaturityLevel::Graduated),
            other => Err(format!("unknown maturity level: {}", other)),
        }
    }
}

/// Exact-match filters for project listing; blank fields are wildcards
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub maturity_level: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl ProjectFilter {
    fn applied(field: Option<&String>) -> Option<&str> {
        field.map(String::as_str).filter(|s| !s.trim().is_empty())
    }

    /// Maturity filter, if supplied and non-blank
    pub fn maturity_level(&self) -> Option<&str> {
        Self::applied(self.maturity_level.as_ref())
    }

    /// Category filter, if supplied and non-blank
    pub fn category(&self) -> Option<&str> {
        Self::applied(self.category.as_ref())
    }

    /// Subcategory filter, if supplied and non-blank
    pub fn subcategory(&self) -> Option<&str> {
        Self::applied(self.subcategory.as_ref())
    }
}
