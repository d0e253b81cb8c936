//! Repository reference parsing from GitHub URLs

use crate::error::{Error, Result};
use crate::types::RepositoryReference;
use regex::Regex;
use std::sync::LazyLock;

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?github\.com/([^/]+)/([^/\s]+)")
        .expect("hardcoded URL pattern is valid")
});

/// Parse `owner/repo` out of text containing a GitHub repository URL
///
/// The pattern may match anywhere in the text. Captures are returned
/// verbatim, so a trailing `.git` stays part of the repository name.
pub fn parse_repo_url(text: &str) -> Result<RepositoryReference> {
    if text.trim().is_empty() {
        return Err(Error::EmptyUrl);
    }

    let caps = GITHUB_URL
        .captures(text)
        .ok_or_else(|| Error::InvalidUrl(text.to_string()))?;

    match (caps.get(1), caps.get(2)) {
        (Some(owner), Some(repo)) => Ok(RepositoryReference {
            organization: owner.as_str().to_string(),
            repository: repo.as_str().to_string(),
        }),
        _ => Err(Error::InvalidUrl(text.to_string())),
    }
}
