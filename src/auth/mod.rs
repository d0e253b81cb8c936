//! Authentication for GitHub
//!
//! Supports the gh CLI and environment variables, used when the form data
//! carries no API token.

mod github;

pub use github::{get_github_auth, resolve_token, test_github_auth, GitHubAuthConfig};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token entered on the form
    Form,
    /// Token from the gh CLI
    Cli,
    /// Token from environment variable
    EnvVar,
}
