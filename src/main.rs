// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load configuration (the GitHub token) once, up front
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results and exit with proper code
//    (0 = every repo has a README, 1 = some READMEs missing, 2 = error)
//
// Rust concepts used:
// - async/await: Because we talk to a network API
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod collector;     // src/collector/ - the summary collection pipeline
mod config;        // src/config.rs - token + API base configuration
mod github;        // src/github/ - GitHub REST API client

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

use collector::{CollectOptions, ReadmeContent, RepoSummary, RepositorySummaryCollector};
use config::Config;
use github::GitHubClient;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {e}");
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = collection complete, every repo had a readable README
//   Ok(1) = collection complete, but some READMEs were missing
//   Err = configuration or listing error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Collect {
            account,
            json,
            include_private,
            preview_limit,
            all_pages,
        } => {
            let options = CollectOptions {
                include_private,
                preview_limit,
                paginate: all_pages,
            };
            handle_collect(&account, json, options).await
        }
        Commands::Whoami => handle_whoami().await,
    }
}

// Handles the 'collect' subcommand
// Parameters:
//   account: GitHub profile URL or bare account name
//   json: whether to output JSON format
//   options: visibility / preview / pagination policy
async fn handle_collect(account: &str, json: bool, options: CollectOptions) -> Result<i32> {
    println!("🔍 Collecting repositories for: {account}");

    // Configuration first: without a token there is nothing to do
    let config = Config::from_env()?;
    let client = GitHubClient::new(&config)?;
    let collector = RepositorySummaryCollector::new(client, options);

    // Run the pipeline (listing + READMEs)
    let summaries = collector.collect(account).await?;

    if summaries.is_empty() {
        println!("⚠️  No repositories found");
        return Ok(0);
    }

    // Print results and determine exit code
    print_results(&summaries, json)?;

    // Count how many repos came back without a usable README
    let missing_count = summaries.iter()
        .filter(|s| !s.has_readme())
        .count();

    if missing_count > 0 {
        Ok(1)  // Exit code 1 = some READMEs missing
    } else {
        Ok(0)  // Exit code 0 = all good
    }
}

// Handles the 'whoami' subcommand
//
// Resolves and prints the login the configured token belongs to.
// Useful to check which account --include-private would match against.
async fn handle_whoami() -> Result<i32> {
    let config = Config::from_env()?;
    let client = GitHubClient::new(&config)?;

    let login = client.authenticated_login().await?;
    println!("👤 Authenticated as: {login}");

    Ok(0)
}

// Prints the results either as a readable listing or JSON
// Parameters:
//   summaries: slice of RepoSummary records
//   json: whether to output JSON format
fn print_results(summaries: &[RepoSummary], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(summaries)?;
        println!("{json_output}");
    } else {
        // Print human-readable listing
        print_listing(summaries);
    }
    Ok(())
}

// Prints one block per repository, plus a totals footer
fn print_listing(summaries: &[RepoSummary]) {
    println!();

    for summary in summaries {
        let visibility = if summary.private { "🔒 Private" } else { "🌍 Public" };

        println!("Repo: {} ({})", summary.name, visibility);
        if !summary.description.is_empty() {
            println!("Description: {}", summary.description);
        }
        println!("URL: {}", summary.url);
        println!("README Preview:\n{}", format_readme(&summary.readme));
        println!("{}\n", "-".repeat(60));
    }

    // Print summary
    let with_readme = summaries.iter().filter(|s| s.has_readme()).count();
    let missing_count = summaries.len() - with_readme;

    println!("📊 Summary:");
    println!("   ✅ With README: {with_readme}");
    println!("   ❌ Missing README: {missing_count}");
    println!("   📋 Total: {}", summaries.len());
}

// Formats the README state as display text
//
// The placeholders only exist in the table view; the JSON output keeps
// the tagged enum so consumers don't have to match magic strings
fn format_readme(readme: &ReadmeContent) -> String {
    match readme {
        ReadmeContent::Present(text) => text.clone(),
        ReadmeContent::Empty => "(README is empty)".to_string(),
        ReadmeContent::Unavailable => "❌ No README found".to_string(),
    }
}
