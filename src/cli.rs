// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "repo-harvester",
    version = "0.1.0",
    about = "A CLI tool to collect a GitHub account's repositories with README previews",
    long_about = "repo-harvester lists the repositories of a GitHub user or organization and \
                  fetches each repository's README, producing one compact summary per repo. \
                  The output feeds a downstream page generator, and the exit code tells CI \
                  whether every project still has a readable README."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (collect, whoami)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect repository summaries (name, URL, description, README) for an account
    ///
    /// Example: repo-harvester collect https://github.com/octocat
    Collect {
        /// GitHub profile URL or bare account name (e.g., https://github.com/octocat or just octocat)
        ///
        /// This is a positional argument (required, no flag needed)
        account: String,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        /// #[arg(long)] creates a flag from the field name
        #[arg(long)]
        json: bool,

        /// Include private repositories when the token owns the target account
        ///
        /// With this flag we first resolve who the token belongs to. If that
        /// login matches the requested account (case-insensitive), we list
        /// through the authenticated endpoint, which can see private repos.
        /// For any other account only public repos are listed either way.
        #[arg(long)]
        include_private: bool,

        /// Maximum README preview length in characters (default: keep full content)
        ///
        /// Content longer than this is cut to the limit and "..." is appended.
        /// Content at or under the limit passes through unchanged.
        #[arg(long)]
        preview_limit: Option<usize>,

        /// Follow pagination past the first 100 repositories
        ///
        /// The API returns at most 100 repos per page. Without this flag we
        /// keep only the first page; with it we keep requesting pages until
        /// a short page signals the end of the listing.
        #[arg(long)]
        all_pages: bool,
    },

    /// Show which account the configured GITHUB_TOKEN belongs to
    ///
    /// Example: repo-harvester whoami
    Whoami,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why use structs and enums?
//    - Structs group related data (like the CLI arguments)
//    - Enums represent choices (like "collect OR whoami")
//    - Both are core Rust types for organizing data
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. What is Option<usize>?
//    - An argument the user may or may not pass
//    - clap leaves it as None when the flag is absent
//    - We use it for --preview-limit: None means "no truncation"
//
// 4. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
// -----------------------------------------------------------------------------
