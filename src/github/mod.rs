// src/github/mod.rs
// =============================================================================
// This module contains everything that talks to the GitHub REST API.
//
// Submodules:
// - account: Extracts an account name from a profile URL
// - api: The HTTP client wrapper with one method per endpoint we use
// - models: serde structs mirroring the API's JSON responses
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod account;
mod api;
mod models;

// Re-export public items from submodules
// This lets users write `github::GitHubClient` instead of
// `github::api::GitHubClient`
pub use account::extract_account;
pub use api::{GitHubClient, PAGE_SIZE};
pub use models::{AuthenticatedUser, ReadmeResponse, RepoOwner, Repository};
