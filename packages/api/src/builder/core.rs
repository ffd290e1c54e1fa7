//! Core `SqlJsonBuilder` structure and configuration methods
//!
//! The builder collects evaluation settings and finishes by taking the
//! document, see `builder::sources` for the terminal methods.

use sqljson_engine::QueryConfig;

/// Fluent builder for a configured `SqlJson`
///
/// # Examples
/// ```
/// use sqljson::SqlJsonBuilder;
///
/// let sql_json = SqlJsonBuilder::new()
///     .strict_result_row_existence(false)
///     .parse(r#"[{"name": "Daniel"}]"#)
///     .expect("valid document");
/// assert!(!sql_json.config().strict_result_row_existence);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlJsonBuilder {
    pub(crate) config: QueryConfig,
}

impl SqlJsonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether SELECT paths missing from a row fail the query (default) or read as null
    #[must_use]
    pub fn strict_result_row_existence(mut self, strict: bool) -> Self {
        self.config = self.config.with_strict_result_row_existence(strict);
        self
    }

    /// Whether date/time shaped text is converted to temporal values (default on)
    #[must_use]
    pub fn temporal_inference(mut self, infer: bool) -> Self {
        self.config = self.config.with_temporal_inference(infer);
        self
    }

    /// Replaces every setting at once
    #[must_use]
    pub fn config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }
}
