//! Terminal notifier and workflow progress

use crate::cli::style::{check, cross, hyperlink_url, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use codejson::error::Error;
use codejson::notify::{Notice, NoticeKind, Notifier};
use codejson::submit::{Phase, ProgressCallback};
use codejson::types::PullRequest;

/// Prints notices as styled lines: successes to stdout, errors to stderr
pub struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{} {}", check(), notice.message),
            NoticeKind::Error => {
                eprintln!("{} {}", cross(), notice.message.error());
            }
        }
    }
}

/// Workflow progress printed step by step
///
/// Step failures are left to the caller, which reports them once through
/// the notifier.
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        println!("{}...", phase.to_string().emphasis());
    }

    async fn on_branch_created(&self, branch: &str, sha: &str) {
        let short = sha.get(..7).unwrap_or(sha);
        println!(
            "  {} Created {} from {}",
            check(),
            branch.accent(),
            short.muted()
        );
    }

    async fn on_file_committed(&self, path: &str, branch: &str) {
        println!("  {} Committed {} to {}", check(), path.emphasis(), branch.accent());
    }

    async fn on_pr_opened(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        println!("  {} Opened PR {}", check(), pr_num.accent());
        println!("    {}", hyperlink_url(&pr.html_url));
    }

    async fn on_error(&self, error: &Error) {
        tracing::debug!(error = %error, "workflow step failed");
    }

    async fn on_message(&self, message: &str) {
        println!("  {}", message.muted());
    }
}
