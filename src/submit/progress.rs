//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, web server, etc.) to receive
//! progress updates while the workflow runs.

use crate::error::Error;
use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Creating the branch that will carry code.json
    BranchCreating,
    /// Committing code.json to the branch
    FileCommitting,
    /// Opening the pull request
    PrOpening,
}

impl Phase {
    /// User-facing prefix for a failure in this step
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::BranchCreating => "Failed to create branch",
            Self::FileCommitting => "Failed to commit code.json",
            Self::PrOpening => "Failed to open pull request",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BranchCreating => "Creating branch",
            Self::FileCommitting => "Committing code.json",
            Self::PrOpening => "Opening pull request",
        })
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during the workflow.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when a step starts
    async fn on_phase(&self, phase: Phase);

    /// Called once the branch exists
    async fn on_branch_created(&self, branch: &str, sha: &str);

    /// Called once the file is committed
    async fn on_file_committed(&self, path: &str, branch: &str);

    /// Called when the pull request is open
    async fn on_pr_opened(&self, pr: &PullRequest);

    /// Called when a step fails
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_branch_created(&self, _branch: &str, _sha: &str) {}
    async fn on_file_committed(&self, _path: &str, _branch: &str) {}
    async fn on_pr_opened(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
