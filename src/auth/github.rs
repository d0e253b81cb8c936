//! GitHub authentication

use crate::auth::AuthSource;
use crate::error::{Error, Result};
use std::env;
use tokio::process::Command;
use tracing::debug;

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// Where the token was obtained from
    pub source: AuthSource,
}

/// Get GitHub authentication
///
/// Priority:
/// 1. gh CLI (`gh auth token`)
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
pub async fn get_github_auth() -> Result<GitHubAuthConfig> {
    if let Some(token) = get_gh_cli_token().await {
        return Ok(GitHubAuthConfig {
            token,
            source: AuthSource::Cli,
        });
    }

    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Some(token) = env::var(var).ok().filter(|t| !t.is_empty()) {
            return Ok(GitHubAuthConfig {
                token,
                source: AuthSource::EnvVar,
            });
        }
    }

    Err(Error::MissingToken)
}

/// Token for the pull-request workflow
///
/// A token entered on the form wins; otherwise the gh CLI and environment
/// are consulted. `None` means no token anywhere.
pub async fn resolve_token(form_token: Option<&str>) -> Option<GitHubAuthConfig> {
    if let Some(token) = form_token.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(GitHubAuthConfig {
            token: token.to_string(),
            source: AuthSource::Form,
        });
    }

    match get_github_auth().await {
        Ok(config) => Some(config),
        Err(e) => {
            debug!(error = %e, "no fallback GitHub token");
            None
        }
    }
}

async fn get_gh_cli_token() -> Option<String> {
    // Check gh is available
    Command::new("gh").arg("--version").output().await.ok()?;

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() { None } else { Some(token) }
}

/// Test GitHub authentication against `api_url`
///
/// Returns the login of the token's user.
pub async fn test_github_auth(config: &GitHubAuthConfig, api_url: &str) -> Result<String> {
    let octocrab = octocrab::Octocrab::builder()
        .personal_token(config.token.clone())
        .base_uri(api_url)
        .map_err(|e| Error::Config(format!("invalid API URL {api_url}: {e}")))?
        .build()
        .map_err(|e| Error::Auth(e.to_string()))?;

    let user = octocrab
        .current()
        .user()
        .await
        .map_err(|e| Error::Auth(format!("Invalid token: {e}")))?;

    Ok(user.login)
}
