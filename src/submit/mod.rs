//! Pull-request workflow
//!
//! Adds code.json to a repository in three dependent steps:
//! 1. Branch creation - new branch from the head of `main`
//! 2. File commit - code.json written on the new branch
//! 3. PR opening - pull request from the new branch into `main`

mod context;
mod execute;
mod progress;

pub use context::{BranchName, WorkflowContext, BRANCH_PREFIX};
pub use execute::{execute_workflow, WorkflowOutcome, WorkflowSettings, WorkflowState};
pub use progress::{NoopProgress, Phase, ProgressCallback};
