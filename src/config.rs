// src/config.rs
// =============================================================================
// This module loads the application configuration.
//
// The only required setting is GITHUB_TOKEN. We read it exactly once at
// startup into a Config value that gets passed around explicitly - no
// global state. That keeps the rest of the app testable: tests construct
// a Config by hand and point api_base at a local mock server instead of
// mutating process environment variables.
//
// The token can live in the real environment or in a .env file next to
// the binary (handy during development). A missing or empty token is a
// configuration error and the program never issues a single request.
// =============================================================================

use anyhow::{anyhow, Result};
use std::env;

// The real GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

// Application configuration, built once in main and passed by reference
//
// Fields are public so tests can build a Config literal aimed at a
// mock server
#[derive(Debug, Clone)]
pub struct Config {
    /// Personal access token used as a Bearer credential on every request
    pub token: String,
    /// Base URL of the GitHub REST API
    pub api_base: String,
}

impl Config {
    // Loads configuration from the process environment (plus .env if present)
    //
    // Returns an error when GITHUB_TOKEN is missing or empty - we treat
    // that as fatal before any network work starts.
    //
    // GITHUB_API_URL optionally redirects all requests (e.g., to a
    // GitHub Enterprise instance); it defaults to api.github.com.
    pub fn from_env() -> Result<Self> {
        // Load .env variables if a .env file exists; ignore if it doesn't
        dotenvy::dotenv().ok();

        let token = env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                anyhow!("GITHUB_TOKEN is not set. Export it or add it to a .env file.")
            })?;

        let api_base = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Self { token, api_base })
    }
}
