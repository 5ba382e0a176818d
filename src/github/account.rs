// src/github/account.rs
// =============================================================================
// This module turns user input into a GitHub account name.
//
// People paste whatever they have at hand:
//   - https://github.com/octocat
//   - https://github.com/octocat/   (trailing slash)
//   - octocat                       (bare account name)
//
// The rule is simple: strip trailing slashes, then take the final
// path segment. A bare name has no slashes, so it passes through
// untouched. We do no further validation - the API itself will tell
// us if the account doesn't exist.
// =============================================================================

use anyhow::{bail, Result};

// Extracts the account name from a profile URL or bare name
//
// Parameters:
//   input: profile URL or account name, as typed by the user
//
// Returns: the account name, or an error if nothing is left after trimming
//
// Example:
//   "https://github.com/octocat/" -> "octocat"
//   "octocat" -> "octocat"
pub fn extract_account(input: &str) -> Result<String> {
    // Trim whitespace first so "octocat " and " octocat" behave
    let trimmed = input.trim().trim_end_matches('/');

    // rsplit('/') walks segments from the right; the first one is the last
    // path segment. For a bare name there is a single segment: the name itself.
    let account = trimmed.rsplit('/').next().unwrap_or("");

    if account.is_empty() {
        bail!("Could not extract an account name from '{}'", input);
    }

    Ok(account.to_string())
}
