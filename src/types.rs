//! Core types for codejson

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An `owner/repo` pair parsed from a repository URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReference {
    /// Repository owner (user or organization)
    pub organization: String,
    /// Repository name, verbatim from the URL
    pub repository: String,
}

impl RepositoryReference {
    /// `owner/repo` path used in API endpoints
    pub fn slug(&self) -> String {
        format!("{}/{}", self.organization, self.repository)
    }
}

/// License block of a repository response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct License {
    /// SPDX identifier (e.g. "MIT")
    #[serde(default)]
    pub spdx_id: Option<String>,
}

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`
///
/// Only the fields the form uses are kept; all are optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryMetadata {
    /// Repository name
    #[serde(default)]
    pub name: Option<String>,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// Web URL of the repository
    #[serde(default)]
    pub html_url: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
    /// License information
    #[serde(default)]
    pub license: Option<License>,
    /// Fork count
    #[serde(default)]
    pub forks_count: Option<u64>,
    /// Repository topics
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    /// Creation timestamp, provider text verbatim
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp, provider text verbatim
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl RepositoryMetadata {
    /// SPDX id of the license, if any
    pub fn license_id(&self) -> Option<&str> {
        self.license.as_ref()?.spdx_id.as_deref()
    }
}

/// Bytes of code per language, in response order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageBreakdown(pub Map<String, Value>);

impl LanguageBreakdown {
    /// Language names in response order
    pub fn names(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Whether no languages were reported
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Flat form data: field name to current value
pub type FormData = Map<String, Value>;

/// A pull request opened on GitHub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}
