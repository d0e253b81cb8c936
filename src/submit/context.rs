//! Workflow context shared by the three steps

use crate::error::{Error, Result};
use crate::platform::parse_repo_url;
use crate::types::RepositoryReference;
use serde_json::Value;
use std::fmt;

/// Prefix of every generated branch name
pub const BRANCH_PREFIX: &str = "code-json-branch";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Name of the branch carrying code.json
///
/// Not checked for uniqueness; a collision surfaces as an API error when the
/// branch is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Generate a name with a random base-36 suffix
    pub fn generate() -> Self {
        Self::with_suffix(&to_base36(rand::random::<u64>()))
    }

    /// Build a name from an explicit suffix
    pub fn with_suffix(suffix: &str) -> Self {
        Self(format!("{BRANCH_PREFIX}{suffix}"))
    }

    /// Branch name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn to_base36(mut n: u64) -> String {
    let mut digits = Vec::new();
    loop {
        digits.push(BASE36[usize::try_from(n % 36).unwrap_or_default()]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Repository, token and branch for one workflow run
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    /// Target repository
    pub repository: RepositoryReference,
    /// API token for the write calls
    pub token: String,
    /// Branch created by this run
    pub branch: BranchName,
}

impl WorkflowContext {
    /// Check preconditions and build the context
    ///
    /// Requires a non-empty token and a document whose `repositoryURL` names
    /// a GitHub repository. Never contacts the network.
    pub fn prepare(token: Option<&str>, document_text: &str) -> Result<Self> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingToken)?;

        let document: Value =
            serde_json::from_str(document_text).map_err(|_| Error::MissingRepositoryUrl)?;
        let url = document
            .get("repositoryURL")
            .and_then(Value::as_str)
            .ok_or(Error::MissingRepositoryUrl)?;

        Ok(Self {
            repository: parse_repo_url(url)?,
            token: token.to_string(),
            branch: BranchName::generate(),
        })
    }
}
