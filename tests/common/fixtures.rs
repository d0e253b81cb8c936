//! Test data factories for codejson types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use codejson::submit::{BranchName, WorkflowContext};
use codejson::types::{License, LanguageBreakdown, RepositoryMetadata, RepositoryReference};
use serde_json::json;

/// `acme/widgets`
pub fn widgets_ref() -> RepositoryReference {
    RepositoryReference {
        organization: "acme".to_string(),
        repository: "widgets".to_string(),
    }
}

/// Metadata for the `acme/widgets` example repository
pub fn widgets_metadata() -> RepositoryMetadata {
    RepositoryMetadata {
        name: Some("widgets".to_string()),
        description: None,
        html_url: Some("https://github.com/acme/widgets".to_string()),
        private: false,
        license: Some(License {
            spdx_id: Some("MIT".to_string()),
        }),
        forks_count: Some(3),
        topics: Some(vec!["cli".to_string()]),
        created_at: Some("2020-01-01T00:00:00Z".to_string()),
        updated_at: Some("2024-01-01T00:00:00Z".to_string()),
    }
}

/// Go and Shell, in that order
pub fn widgets_languages() -> LanguageBreakdown {
    serde_json::from_value(json!({"Go": 100, "Shell": 5})).unwrap()
}

/// GitHub's JSON for the widgets repository
pub fn widgets_metadata_json() -> String {
    json!({
        "name": "widgets",
        "private": false,
        "forks_count": 3,
        "license": {"key": "mit", "spdx_id": "MIT"},
        "html_url": "https://github.com/acme/widgets",
        "topics": ["cli"],
        "description": null,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
    })
    .to_string()
}

/// A small schema document
pub fn schema_json() -> String {
    json!({
        "type": "array",
        "properties": {
            "items": {
                "name": {"type": "string"},
                "description": {"type": "string"},
                "repositoryURL": {"type": "string"},
                "languages": {"type": "array"},
                "status": {"type": "string"},
                "reuseFrequency": {"type": "object"},
            }
        }
    })
    .to_string()
}

/// Generated code.json text for `acme/widgets`
pub fn document_text() -> String {
    serde_json::to_string_pretty(&json!({
        "name": "widgets",
        "repositoryURL": "https://github.com/acme/widgets",
    }))
    .unwrap()
}

/// Workflow context with a deterministic branch
pub fn widgets_context() -> WorkflowContext {
    WorkflowContext {
        repository: widgets_ref(),
        token: "ghp_test".to_string(),
        branch: BranchName::with_suffix("test1"),
    }
}
