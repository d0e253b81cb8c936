//! Repository import
//!
//! Fetches GitHub metadata for a repository and pre-fills the metadata form:
//! 1. Fetch - repository metadata and language breakdown
//! 2. Populate - map them onto the form's fields

mod fetch;
mod populate;

pub use fetch::{fetch_languages, fetch_repository_info, fetch_repository_metadata, RepositoryInfo};
pub use populate::{
    populate_form, prefill_form, Dates, FormFields, FormFile, FormRenderer, FormSubmission,
    LicenseEntry, Permissions, ReuseFrequency, Visibility,
};
