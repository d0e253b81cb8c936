//! Schema-ordered serializer

use crate::document::Schema;
use crate::error::Result;
use crate::types::FormData;
use serde_json::{Map, Value};

/// Form field carrying the GitHub API token
pub const TOKEN_FIELD: &str = "gh_api_key";

/// Form field produced by the form's submit button
const SUBMIT_FIELD: &str = "submit";

/// Collapse a multi-select answer into the list of selected options
///
/// An object whose every member is a boolean becomes the keys that are
/// `true`, in insertion order. `null` is an empty group. Any other value is
/// returned unchanged.
pub fn expand_flag_group(value: Value) -> Value {
    match value {
        Value::Object(map) if map.values().all(Value::is_boolean) => Value::Array(
            map.into_iter()
                .filter(|(_, selected)| selected.as_bool() == Some(true))
                .map(|(option, _)| Value::String(option))
                .collect(),
        ),
        Value::Null => Value::Array(Vec::new()),
        other => other,
    }
}

/// The canonical code.json document
///
/// Holds exactly the schema's fields, in schema order. A field the form did
/// not provide is kept as an absent entry and left out of the JSON text.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalDocument {
    entries: Vec<(String, Option<Value>)>,
}

impl CanonicalDocument {
    /// Field names in canonical order, including absent ones
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Value of a field, `None` when absent or not in the schema
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// JSON value of the document, absent fields omitted
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .filter_map(|(k, v)| v.clone().map(|v| (k.clone(), v)))
            .collect();
        Value::Object(map)
    }

    /// Pretty JSON text with two-space indentation
    pub fn to_json_text(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }
}

/// Reorder form data into the schema's field order
pub fn order_by_schema(data: &FormData, schema: &Schema) -> CanonicalDocument {
    let entries = schema
        .fields()
        .iter()
        .map(|field| (field.clone(), data.get(field).cloned().map(expand_flag_group)))
        .collect();

    CanonicalDocument { entries }
}

/// Result of the document-generation step
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The canonical document
    pub document: CanonicalDocument,
    /// Its JSON text, as downloaded and committed
    pub text: String,
    /// API token entered on the form, if any
    pub token: Option<String>,
}

/// Generate code.json from submitted form data
///
/// Drops the submit button's field and picks up the API token before
/// ordering the remaining data by `schema`.
pub fn generate_document(mut data: FormData, schema: &Schema) -> Result<GeneratedDocument> {
    data.remove(SUBMIT_FIELD);

    let token = data
        .get(TOKEN_FIELD)
        .and_then(Value::as_str)
        .map(ToString::to_string);

    let document = order_by_schema(&data, schema);
    let text = document.to_json_text()?;

    Ok(GeneratedDocument {
        document,
        text,
        token,
    })
}
