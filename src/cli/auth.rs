//! Auth command - test and explain authentication

use crate::cli::style::{check, Stylize};
use anstream::println;
use issue_seeder::auth::{resolve_credential, verify_credential};
use issue_seeder::error::Result;

/// Run the auth test command
pub async fn run_auth_test(api_url: &str) -> Result<()> {
    println!("Testing GitHub authentication...");
    let credential = resolve_credential().await?;
    let login = verify_credential(&credential, api_url).await?;
    println!("{} Authenticated as {}", check(), login.accent());
    println!("  Token source: {}", credential.source.muted());
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitHub Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: Environment variable (or a .env file in the working directory)");
    println!("  Set GITHUB_TOKEN (or GH_TOKEN) to a token with `repo` scope");
    println!("  Add `project` scope to link issues into project boards");
    println!();
    println!("Option 2: GitHub CLI");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GITHUB_API_URL to https://<host>/api/v3");
}

/// Wrapper for auth commands
pub async fn run_auth(api_url: &str, test: bool) -> Result<()> {
    if test {
        run_auth_test(api_url).await
    } else {
        run_auth_setup();
        Ok(())
    }
}
