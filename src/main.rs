//! codejson - code.json metadata for GitHub repositories
//!
//! CLI binary: import repository data into a form file, generate code.json,
//! and submit it as a pull request.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codejson::config::Config;
use codejson::notify::Notifier;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "codejson")]
#[command(about = "Generate code.json metadata for GitHub repositories")]
#[command(version)]
struct Cli {
    /// Form data file
    #[arg(short, long, global = true, default_value = "form.json")]
    form: PathBuf,

    /// Schema document giving the code.json field order
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    /// GitHub API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pre-fill the form from a GitHub repository
    Import {
        /// Repository URL, e.g. https://github.com/owner/repo
        url: String,
    },

    /// Generate code.json from the form
    Generate {
        /// Where to write code.json
        #[arg(short, long, default_value = "code.json")]
        out: PathBuf,
    },

    /// Open a pull request adding code.json to the repository
    Submit {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, notifier: &cli::CliNotifier) -> Result<()> {
    let config = Config::from_env()?.with_overrides(cli.api_url, cli.schema)?;

    match cli.command {
        Commands::Import { url } => {
            cli::run_import(&config, &url, &cli.form, notifier).await?;
        }
        Commands::Generate { out } => {
            cli::run_generate(&config, &cli.form, &out, notifier)?;
        }
        Commands::Submit { yes } => {
            cli::run_submit(&config, &cli.form, yes, notifier).await?;
        }
        Commands::Auth { action } => {
            let action_str = match action {
                AuthAction::Test => "test",
                AuthAction::Setup => "setup",
            };
            cli::run_auth(&config, action_str).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    let notifier = cli::CliNotifier;

    match run(cli, &notifier).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            notifier.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
