//! Schema document loading

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Field order taken from a schema document
///
/// Only the key order of `properties.items` is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<String>,
}

impl Schema {
    /// Load a schema document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Schema(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    /// Parse a schema document
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| Error::Schema(format!("invalid JSON: {e}")))?;

        let items = value
            .get("properties")
            .and_then(|p| p.get("items"))
            .and_then(Value::as_object)
            .ok_or_else(|| Error::Schema("missing properties.items object".to_string()))?;

        Ok(Self {
            fields: items.keys().cloned().collect(),
        })
    }

    /// Build a schema directly from field names
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Canonical field order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}
