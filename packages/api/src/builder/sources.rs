//! Terminal builder methods taking the document to query

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value as JsonValue;

use crate::SqlJson;
use crate::builder::core::SqlJsonBuilder;
use crate::error::Result;

impl SqlJsonBuilder {
    /// Finishes with an already parsed document
    #[must_use]
    pub fn document(self, document: JsonValue) -> SqlJson {
        SqlJson::with_config(document, self.config)
    }

    /// Finishes by parsing JSON text
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Json` when the text is not valid JSON.
    pub fn parse(self, json: &str) -> Result<SqlJson> {
        let document = serde_json::from_str(json)?;
        log::debug!("SqlJson: parsed document from {} bytes of text", json.len());
        Ok(self.document(document))
    }

    /// Finishes by reading JSON from `reader`
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Json` when the input is not valid JSON,
    /// including when the reader itself fails mid-document.
    pub fn read<R: Read>(self, reader: R) -> Result<SqlJson> {
        let document = serde_json::from_reader(reader)?;
        Ok(self.document(document))
    }

    /// Finishes by reading the JSON file at `path`
    ///
    /// # Errors
    ///
    /// Returns `SqlJsonError::Io` when the file cannot be opened and
    /// `SqlJsonError::Json` when its content is not valid JSON.
    pub fn open(self, path: impl AsRef<Path>) -> Result<SqlJson> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|error| {
            log::warn!("SqlJson: cannot open {}: {error}", path.display());
            error
        })?;
        log::debug!("SqlJson: reading document from {}", path.display());
        self.read(BufReader::new(file))
    }
}
