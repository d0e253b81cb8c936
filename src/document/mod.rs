//! code.json document generation
//!
//! The emitted document's fields follow the order of the schema's
//! `properties.items` mapping, with multi-select answers collapsed to lists.

mod schema;
mod serialize;

pub use schema::Schema;
pub use serialize::{
    expand_flag_group, generate_document, order_by_schema, CanonicalDocument, GeneratedDocument,
    TOKEN_FIELD,
};

/// File name of the generated document
pub const CODE_JSON_FILE: &str = "code.json";
