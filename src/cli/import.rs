//! Import command - pre-fill the form from a GitHub repository

use crate::cli::style::{spinner_style, Stylize};
use anstream::println;
use codejson::config::Config;
use codejson::error::Result;
use codejson::import::{fetch_repository_info, prefill_form, FormFile};
use codejson::notify::Notifier;
use codejson::platform::{parse_repo_url, GitHubService};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

/// Run the import command
pub async fn run_import(
    config: &Config,
    url: &str,
    form_path: &Path,
    notifier: &dyn Notifier,
) -> Result<()> {
    let repo = parse_repo_url(url)?;
    let mut form = FormFile::open(form_path)?;
    let service = GitHubService::new(&config.api_url, None)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!("Loading {}...", repo.slug()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let fetched = fetch_repository_info(&service, &repo).await;
    spinner.finish_and_clear();

    prefill_form(&mut form, &fetched?)?;
    notifier.success("Repository data loaded successfully!");
    println!(
        "  {} {}",
        "Form data written to".muted(),
        form.path().display().accent()
    );
    Ok(())
}
