//! Query Configuration Module
//!
//! Evaluation switches handed to every `JsonProcessor` explicitly, so queries
//! running side by side with different settings never observe each other.

use serde::{Deserialize, Serialize};

/// Runtime query configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Unresolvable SELECT paths fail with `ColumnNotFound` instead of yielding `Null`
    pub strict_result_row_existence: bool,
    /// Text nodes are probed for ISO date/time shapes during conversion
    pub infer_temporal_text: bool,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            strict_result_row_existence: true,
            infer_temporal_text: true,
        }
    }
}

impl QueryConfig {
    /// Configuration that tolerates absent SELECT paths
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict_result_row_existence: false,
            infer_temporal_text: true,
        }
    }

    #[must_use]
    pub const fn with_strict_result_row_existence(mut self, strict: bool) -> Self {
        self.strict_result_row_existence = strict;
        self
    }

    #[must_use]
    pub const fn with_temporal_inference(mut self, infer: bool) -> Self {
        self.infer_temporal_text = infer;
        self
    }
}
