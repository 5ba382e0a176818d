// src/github/api.rs
// =============================================================================
// This module wraps the GitHub REST API endpoints we need.
//
// Endpoints used:
// - GET /user                          -> who does this token belong to?
// - GET /users/{account}/repos         -> public repos of any account
// - GET /user/repos                    -> public + private repos of the token owner
// - GET /repos/{owner}/{repo}/readme   -> base64-encoded README metadata
//
// One GitHubClient holds a single reqwest::Client with the auth header
// pre-installed, so every request reuses the same connection pool.
//
// Error policy:
// - A non-2xx response from an identity or listing call is an error with
//   the status and response body attached (those abort the whole run)
// - A non-2xx response from the readme call is Ok(None) - a repo without
//   a README is an everyday case, not a failure
// =============================================================================

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::github::models::{AuthenticatedUser, ReadmeResponse, Repository};

// The API caps listing pages at 100 entries; we always ask for the max
pub const PAGE_SIZE: usize = 100;

// A thin, authenticated client for the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    // Creates a client with the required headers baked in
    //
    // GitHub rejects requests without a User-Agent, and the Accept header
    // opts into the stable JSON media type. The token rides along on every
    // request as a Bearer credential.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("repo-harvester"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .context("Invalid token value")?;
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10)) // 10 second timeout per request
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    // Resolves the login of the account the token belongs to (GET /user)
    //
    // A failure here is fatal to the caller: without an identity we cannot
    // decide which listing endpoint to use.
    pub async fn authenticated_login(&self) -> Result<String> {
        let url = format!("{}/user", self.base_url);
        let user: AuthenticatedUser = self.get_json(&url).await?;
        Ok(user.login)
    }

    // Lists one page of an account's public repositories
    //
    // Parameters:
    //   account: user or organization name
    //   page: 1-based page number
    pub async fn list_public_repos(&self, account: &str, page: u32) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated&page={}",
            self.base_url, account, PAGE_SIZE, page
        );
        self.get_json(&url).await
    }

    // Lists one page of the token owner's repositories (public + private)
    pub async fn list_own_repos(&self, page: u32) -> Result<Vec<Repository>> {
        let url = format!(
            "{}/user/repos?per_page={}&sort=updated&page={}",
            self.base_url, PAGE_SIZE, page
        );
        self.get_json(&url).await
    }

    // Fetches README metadata for one repository
    //
    // Returns:
    //   Ok(Some(readme)) - the repo has a README, content still base64
    //   Ok(None)         - the API answered non-2xx (usually 404: no README)
    //   Err(..)          - the request itself failed (network, bad JSON)
    //
    // The caller decides what to do with Err; for us a README problem only
    // ever degrades that one repository's record.
    pub async fn fetch_readme(&self, owner: &str, repo: &str) -> Result<Option<ReadmeResponse>> {
        let url = format!("{}/repos/{}/{}/readme", self.base_url, owner, repo);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to send README request")?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let readme = response
            .json::<ReadmeResponse>()
            .await
            .context("Failed to deserialize README response")?;

        Ok(Some(readme))
    }

    // Shared GET-and-deserialize helper for the fatal-on-error endpoints
    //
    // Non-2xx responses become an error carrying the status and the body
    // GitHub sent back (its error bodies say useful things like
    // "Bad credentials" or "Not Found").
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API error ({status}): {body}");
        }

        response
            .json::<T>()
            .await
            .context("Failed to deserialize GitHub API response")
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one Client for everything?
//    - reqwest::Client keeps a connection pool internally
//    - Reusing it avoids a TLS handshake per request
//    - It's cheap to clone (it's just a reference counter internally)
//
// 2. What is DeserializeOwned?
//    - A serde trait bound meaning "can be deserialized without borrowing"
//    - Needed because response.json() produces owned data from the body
//
// 3. Why does fetch_readme return Result<Option<..>>?
//    - Two different "no data" situations need different handling:
//      Ok(None) = the API said no (expected, handled per repo)
//      Err = we couldn't even ask properly (caller decides)
//    - Collapsing them would lose information the caller wants
//
// 4. What does .context() do?
//    - Wraps an error with a human-readable message
//    - The original error stays attached as the cause
//    - Comes from the anyhow crate
// -----------------------------------------------------------------------------
