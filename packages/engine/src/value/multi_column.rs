//! Multi-value columns
//!
//! A multi-value column holds every terminal value reached by a path that
//! crossed one or more arrays. It only exists while the comparison that asked
//! for it (through `matchAny(...)` or `matchAll(...)`) is being evaluated.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::core::Value;

/// How the items of a multi-value column combine into one boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// At least one item must satisfy the predicate
    MatchAny,
    /// Every item must satisfy the predicate
    MatchAll,
}

impl MatchMode {
    const ALL: [MatchMode; 2] = [MatchMode::MatchAny, MatchMode::MatchAll];

    /// Name of the query function selecting this mode
    #[must_use]
    pub const fn function_name(self) -> &'static str {
        match self {
            MatchMode::MatchAny => "matchAny",
            MatchMode::MatchAll => "matchAll",
        }
    }

    #[must_use]
    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.function_name() == name)
    }

    /// Comma separated list of the supported function names
    #[must_use]
    pub fn all_options_as_string() -> String {
        Self::ALL
            .iter()
            .map(|mode| mode.function_name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Folds per-item predicate results according to the mode
    pub fn combine(self, mut results: impl Iterator<Item = bool>) -> bool {
        match self {
            MatchMode::MatchAny => results.any(|r| r),
            MatchMode::MatchAll => results.all(|r| r),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultiValueColumn {
    pub mode: MatchMode,
    pub items: Vec<Value>,
}

impl MultiValueColumn {
    #[must_use]
    pub fn new(mode: MatchMode, items: Vec<Value>) -> Self {
        Self { mode, items }
    }
}

impl fmt::Display for MultiValueColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.mode)?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str(")")
    }
}
