//! Submit command - open a pull request adding code.json

use crate::cli::generate::load_document;
use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use codejson::auth::resolve_token;
use codejson::config::Config;
use codejson::error::{Error, Result};
use codejson::notify::Notifier;
use codejson::platform::GitHubService;
use codejson::submit::{execute_workflow, WorkflowContext, WorkflowSettings};
use dialoguer::Confirm;
use std::path::Path;

/// Run the submit command
pub async fn run_submit(
    config: &Config,
    form_path: &Path,
    assume_yes: bool,
    notifier: &dyn Notifier,
) -> Result<()> {
    let generated = load_document(config, form_path)?;

    let auth = resolve_token(generated.token.as_deref()).await;
    let ctx = WorkflowContext::prepare(auth.as_ref().map(|a| a.token.as_str()), &generated.text)?;

    println!(
        "Submitting code.json to {} on branch {}",
        ctx.repository.slug().accent(),
        ctx.branch.as_str().accent()
    );
    if let Some(auth) = &auth {
        println!("  {}", format!("Token source: {:?}", auth.source).muted());
    }
    println!();

    if !assume_yes {
        let proceed = Confirm::new()
            .with_prompt("Open a pull request?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("confirmation prompt failed: {e}")))?;
        if !proceed {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
    }

    let service = GitHubService::new(&config.api_url, Some(ctx.token.clone()))?;
    let outcome = execute_workflow(
        &ctx,
        &generated.text,
        &service,
        &CliProgress,
        &WorkflowSettings::default(),
    )
    .await;

    if let Some(err) = outcome.error {
        if outcome.branch_created {
            println!(
                "  {}",
                format!("Branch {} was created and has been left in place.", outcome.branch)
                    .muted()
            );
        }
        return Err(err);
    }

    println!();
    notifier.success("Pull request created successfully!");
    Ok(())
}
