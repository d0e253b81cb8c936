//! codejson - code.json metadata for GitHub repositories
//!
//! Pre-fills a metadata form from the GitHub API, serializes the form into a
//! schema-ordered `code.json` document, and opens a pull request that adds
//! the document to the repository.

pub mod auth;
pub mod config;
pub mod document;
pub mod error;
pub mod import;
pub mod notify;
pub mod platform;
pub mod submit;
pub mod types;

pub use error::{Error, Result};
