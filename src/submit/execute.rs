//! Workflow execution
//!
//! Runs branch creation, file commit and PR opening in order, stopping at
//! the first failure. Side effects of completed steps are not rolled back.

use crate::document::CODE_JSON_FILE;
use crate::error::{Error, Result};
use crate::platform::{Committer, FileCommit, HostingService, PullRequestRequest};
use crate::submit::{Phase, ProgressCallback, WorkflowContext};
use crate::types::PullRequest;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::info;

/// Workflow state
///
/// `Done` and `Failed` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Not started
    Idle,
    /// A step is in progress
    Running(Phase),
    /// Pull request opened
    Done,
    /// Stopped; `step` is `None` when nothing had started
    Failed {
        /// Step that failed
        step: Option<Phase>,
    },
}

impl WorkflowState {
    /// State after the current step succeeds
    #[must_use]
    pub const fn advance(self) -> Self {
        match self {
            Self::Idle => Self::Running(Phase::BranchCreating),
            Self::Running(Phase::BranchCreating) => Self::Running(Phase::FileCommitting),
            Self::Running(Phase::FileCommitting) => Self::Running(Phase::PrOpening),
            Self::Running(Phase::PrOpening) => Self::Done,
            terminal @ (Self::Done | Self::Failed { .. }) => terminal,
        }
    }

    /// State after the current step fails
    #[must_use]
    pub const fn fail(self) -> Self {
        match self {
            Self::Idle => Self::Failed { step: None },
            Self::Running(phase) => Self::Failed { step: Some(phase) },
            terminal @ (Self::Done | Self::Failed { .. }) => terminal,
        }
    }

    /// Whether no further transitions are possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Failed { .. })
    }
}

/// Fixed values used by the workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    /// Branch the new branch starts from and the PR targets
    pub base_branch: String,
    /// Path of the committed file
    pub file_path: String,
    /// Commit message
    pub commit_message: String,
    /// Committer identity
    pub committer: Committer,
    /// PR title
    pub pr_title: String,
    /// PR body
    pub pr_body: String,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            base_branch: "main".to_string(),
            file_path: CODE_JSON_FILE.to_string(),
            commit_message: "Add code.json metadata file".to_string(),
            committer: Committer {
                name: "code-json-generator".to_string(),
                email: "code-json-generator@users.noreply.github.com".to_string(),
            },
            pr_title: "Add code.json metadata file".to_string(),
            pr_body: "This pull request adds a code.json metadata file generated by codejson."
                .to_string(),
        }
    }
}

/// Result of a workflow run
#[derive(Debug)]
pub struct WorkflowOutcome {
    /// Final state, `Done` or `Failed`
    pub state: WorkflowState,
    /// Branch used by this run
    pub branch: String,
    /// Whether the branch was created (it is kept on later failures)
    pub branch_created: bool,
    /// The opened pull request
    pub pull_request: Option<PullRequest>,
    /// Failure of the failed step
    pub error: Option<Error>,
}

impl WorkflowOutcome {
    /// Whether the pull request was opened
    pub const fn success(&self) -> bool {
        matches!(self.state, WorkflowState::Done)
    }
}

/// Run the workflow for `document_text`
///
/// The text is committed byte for byte; it is never re-serialized.
pub async fn execute_workflow(
    ctx: &WorkflowContext,
    document_text: &str,
    service: &dyn HostingService,
    progress: &dyn ProgressCallback,
    settings: &WorkflowSettings,
) -> WorkflowOutcome {
    let mut outcome = WorkflowOutcome {
        state: WorkflowState::Idle,
        branch: ctx.branch.to_string(),
        branch_created: false,
        pull_request: None,
        error: None,
    };

    // Phase: branch creation
    outcome.state = outcome.state.advance();
    progress.on_phase(Phase::BranchCreating).await;
    match create_branch(ctx, service, settings).await {
        Ok(sha) => {
            info!(branch = %ctx.branch, %sha, "branch created");
            outcome.branch_created = true;
            progress.on_branch_created(ctx.branch.as_str(), &sha).await;
        }
        Err(e) => return fail(outcome, Phase::BranchCreating, e, progress).await,
    }

    // Phase: file commit
    outcome.state = outcome.state.advance();
    progress.on_phase(Phase::FileCommitting).await;
    if let Err(e) = commit_file(ctx, document_text, service, progress, settings).await {
        return fail(outcome, Phase::FileCommitting, e, progress).await;
    }
    info!(branch = %ctx.branch, path = %settings.file_path, "file committed");
    progress
        .on_file_committed(&settings.file_path, ctx.branch.as_str())
        .await;

    // Phase: PR opening
    outcome.state = outcome.state.advance();
    progress.on_phase(Phase::PrOpening).await;
    let request = PullRequestRequest {
        title: settings.pr_title.clone(),
        body: settings.pr_body.clone(),
        head: ctx.branch.to_string(),
        base: settings.base_branch.clone(),
    };
    match service.create_pull_request(&ctx.repository, &request).await {
        Ok(pr) => {
            info!(number = pr.number, url = %pr.html_url, "pull request opened");
            progress.on_pr_opened(&pr).await;
            outcome.pull_request = Some(pr);
            outcome.state = outcome.state.advance();
        }
        Err(e) => return fail(outcome, Phase::PrOpening, e, progress).await,
    }

    outcome
}

async fn create_branch(
    ctx: &WorkflowContext,
    service: &dyn HostingService,
    settings: &WorkflowSettings,
) -> Result<String> {
    let sha = service
        .get_branch_sha(&ctx.repository, &settings.base_branch)
        .await?;
    service
        .create_branch(&ctx.repository, ctx.branch.as_str(), &sha)
        .await?;
    Ok(sha)
}

async fn commit_file(
    ctx: &WorkflowContext,
    document_text: &str,
    service: &dyn HostingService,
    progress: &dyn ProgressCallback,
    settings: &WorkflowSettings,
) -> Result<()> {
    // The branch starts from main, which may already carry the file.
    let existing = service
        .find_file_sha(&ctx.repository, &settings.file_path, ctx.branch.as_str())
        .await?;
    if existing.is_some() {
        progress
            .on_message(&format!("Updating existing {}", settings.file_path))
            .await;
    }

    let commit = FileCommit {
        path: settings.file_path.clone(),
        message: settings.commit_message.clone(),
        committer: settings.committer.clone(),
        content: BASE64.encode(document_text),
        branch: ctx.branch.to_string(),
        sha: existing,
    };
    service.put_file(&ctx.repository, &commit).await
}

async fn fail(
    mut outcome: WorkflowOutcome,
    step: Phase,
    source: Error,
    progress: &dyn ProgressCallback,
) -> WorkflowOutcome {
    let error = Error::Workflow {
        step,
        source: Box::new(source),
    };
    progress.on_error(&error).await;

    outcome.state = outcome.state.fail();
    outcome.error = Some(error);
    outcome
}
