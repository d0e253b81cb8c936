//! Auth command - test and explain GitHub authentication

use codejson::auth::{get_github_auth, test_github_auth};
use codejson::config::Config;
use codejson::error::Result;

/// Run the auth test command
pub async fn run_auth_test(config: &Config) -> Result<()> {
    println!("Testing GitHub authentication...");
    let auth = get_github_auth().await?;
    let username = test_github_auth(&auth, &config.api_url).await?;
    println!("Authenticated as: {username}");
    println!("Token source: {:?}", auth.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitHub Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: API key on the form");
    println!("  Add \"gh_api_key\": \"<token>\" to your form data file");
    println!();
    println!("Option 2: GitHub CLI");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
    println!();
    println!("Option 3: Environment variable");
    println!("  Set GITHUB_TOKEN or GH_TOKEN");
    println!();
    println!("The token needs permission to create branches, commit contents");
    println!("and open pull requests on the target repository.");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GH_HOST to your instance hostname");
}

/// Wrapper for auth commands
pub async fn run_auth(config: &Config, action: &str) -> Result<()> {
    match action {
        "test" => run_auth_test(config).await,
        "setup" => {
            run_auth_setup();
            Ok(())
        }
        _ => {
            println!("Unknown action: {action}. Use 'test' or 'setup'.");
            Ok(())
        }
    }
}
