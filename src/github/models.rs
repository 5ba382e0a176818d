// src/github/models.rs
// =============================================================================
// serde models for the GitHub API responses we consume.
//
// We only declare the fields we actually read - serde happily ignores
// the (many) other fields the API sends back.
// =============================================================================

use serde::Deserialize;

/// One repository as returned by the listing endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    /// "owner/name", used for progress output
    pub full_name: String,
    pub html_url: String,
    /// The API sends null for repos without a description
    pub description: Option<String>,
    pub private: bool,
    pub owner: RepoOwner,
}

/// The owner object nested inside a repository record
#[derive(Debug, Clone, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// Response of `GET /user` - the identity the token belongs to
#[derive(Debug, Deserialize)]
pub struct AuthenticatedUser {
    pub login: String,
}

/// Response of `GET /repos/{owner}/{repo}/readme`
///
/// The content field is base64 with embedded newlines; encoding says so
#[derive(Debug, Deserialize)]
pub struct ReadmeResponse {
    pub content: String,
    pub encoding: String,
}
