//! GitHub hosting service
//!
//! The workflow and the fetcher talk to GitHub only through
//! [`HostingService`], so tests can substitute a mock.

mod detection;
mod github;

pub use detection::parse_repo_url;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{LanguageBreakdown, PullRequest, RepositoryMetadata, RepositoryReference};
use async_trait::async_trait;
use serde::Serialize;

/// Identity recorded as the committer of `code.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Committer {
    /// Committer name
    pub name: String,
    /// Committer email
    pub email: String,
}

/// A create-or-update write of one file on a branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCommit {
    /// Path of the file in the repository
    pub path: String,
    /// Commit message
    pub message: String,
    /// Committer identity
    pub committer: Committer,
    /// Base64-encoded file content
    pub content: String,
    /// Branch receiving the commit
    pub branch: String,
    /// Blob sha of the existing file, when updating
    pub sha: Option<String>,
}

/// Parameters for opening a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestRequest {
    /// PR title
    pub title: String,
    /// PR body
    pub body: String,
    /// Head branch
    pub head: String,
    /// Base branch
    pub base: String,
}

/// Hosting service trait for the read and write calls codejson makes
#[async_trait]
pub trait HostingService: Send + Sync {
    /// Fetch repository metadata (unauthenticated)
    async fn get_repository(&self, repo: &RepositoryReference) -> Result<RepositoryMetadata>;

    /// Fetch bytes of code per language (unauthenticated)
    async fn get_languages(&self, repo: &RepositoryReference) -> Result<LanguageBreakdown>;

    /// Read the sha of a branch's head commit
    async fn get_branch_sha(&self, repo: &RepositoryReference, branch: &str) -> Result<String>;

    /// Create `refs/heads/<branch>` pointing at `sha`
    async fn create_branch(&self, repo: &RepositoryReference, branch: &str, sha: &str)
    -> Result<()>;

    /// Blob sha of a file on a branch, `None` if the file does not exist
    async fn find_file_sha(
        &self,
        repo: &RepositoryReference,
        path: &str,
        branch: &str,
    ) -> Result<Option<String>>;

    /// Create or update a file on a branch
    async fn put_file(&self, repo: &RepositoryReference, commit: &FileCommit) -> Result<()>;

    /// Open a pull request
    async fn create_pull_request(
        &self,
        repo: &RepositoryReference,
        request: &PullRequestRequest,
    ) -> Result<PullRequest>;
}
