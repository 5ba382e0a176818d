// src/collector/pipeline.rs
// =============================================================================
// This module builds the repository summary list for one account.
//
// How it works:
// 1. Extract the account name from the URL (or take a bare name as-is)
// 2. Decide which listing endpoint to use (public vs. authenticated)
// 3. Fetch the repository listing, one page at a time
// 4. For each repository, in listing order, fetch and decode its README
// 5. Assemble one summary record per repository
//
// Everything runs strictly sequentially - one request at a time. The
// volumes are small (pages of 100 repos) and sequential execution keeps
// the output order identical to the listing order for free.
//
// Failure policy:
// - Identity or listing failures abort the whole run
// - README failures degrade that one record to Unavailable and move on
// =============================================================================

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::preview::ReadmeContent;
use crate::github::{extract_account, GitHubClient, Repository, PAGE_SIZE};

// Policy knobs for one collection run
//
// The defaults reproduce the simplest behavior: public repos only,
// full README content, first page only.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Resolve the token's identity and use the authenticated listing
    /// (which can see private repos) when it matches the target account
    pub include_private: bool,
    /// Cut README previews to this many characters (None = keep everything)
    pub preview_limit: Option<usize>,
    /// Keep requesting listing pages until a short page ends the run
    pub paginate: bool,
}

// One collected repository summary
//
// This is the output record handed to the presentation layer.
// The readme field flattens into the record, so the JSON looks like:
//   { "name": ..., "url": ..., "description": ..., "private": ...,
//     "readme_status": "present", "readme": "# ..." }
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub url: String,
    /// Empty string when the repository has no description
    pub description: String,
    pub private: bool,
    #[serde(flatten)]
    pub readme: ReadmeContent,
}

impl RepoSummary {
    /// Helper method to check if this repo came back with a README
    pub fn has_readme(&self) -> bool {
        self.readme.is_available()
    }
}

// Collects summaries for all repositories of one account
pub struct RepositorySummaryCollector {
    client: GitHubClient,
    options: CollectOptions,
}

impl RepositorySummaryCollector {
    pub fn new(client: GitHubClient, options: CollectOptions) -> Self {
        Self { client, options }
    }

    // Runs the full pipeline for one account
    //
    // Parameters:
    //   account_url_or_name: profile URL or bare account name
    //
    // Returns: one summary per listed repository, in listing order.
    // Errors only for input, identity, or listing problems - a bad or
    // missing README never fails the run.
    pub async fn collect(&self, account_url_or_name: &str) -> Result<Vec<RepoSummary>> {
        let account = extract_account(account_url_or_name)?;

        // Scope resolution: only worth an extra request when the caller
        // asked for private repos. The authenticated endpoint only helps
        // when the token actually owns the target account.
        let use_owner_listing = if self.options.include_private {
            let login = self.client.authenticated_login().await?;
            login.eq_ignore_ascii_case(&account)
        } else {
            false
        };

        let repos = self.list_repositories(&account, use_owner_listing).await?;

        println!("📄 Found {} repositories", repos.len());

        // Fetch READMEs one at a time, preserving listing order
        let mut summaries = Vec::with_capacity(repos.len());
        for repo in repos {
            println!("  Fetching README: {}", repo.full_name);

            let readme = self.readme_for(&repo).await;

            summaries.push(RepoSummary {
                name: repo.name,
                url: repo.html_url,
                description: repo.description.unwrap_or_default(),
                private: repo.private,
                readme,
            });
        }

        Ok(summaries)
    }

    // Fetches the repository listing, following pagination when enabled
    //
    // A page shorter than PAGE_SIZE means the listing is exhausted
    async fn list_repositories(
        &self,
        account: &str,
        use_owner_listing: bool,
    ) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let batch = if use_owner_listing {
                self.client.list_own_repos(page).await?
            } else {
                self.client.list_public_repos(account, page).await?
            };

            let batch_len = batch.len();
            repos.extend(batch);

            if !self.options.paginate || batch_len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    // Fetches and decodes one repository's README
    //
    // Any failure - missing file, transport error, undecodable payload -
    // degrades to Unavailable instead of propagating
    async fn readme_for(&self, repo: &Repository) -> ReadmeContent {
        match self.client.fetch_readme(&repo.owner.login, &repo.name).await {
            Ok(Some(raw)) => ReadmeContent::from_response(&raw, self.options.preview_limit),
            Ok(None) => ReadmeContent::Unavailable,
            Err(e) => {
                eprintln!("  Warning: Failed to fetch README for {}: {}", repo.full_name, e);
                ReadmeContent::Unavailable
            }
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why sequential instead of concurrent fetches?
//    - The result must keep the listing order, and volumes are small
//    - A plain for loop with .await gives us that with zero bookkeeping
//    - Concurrency would buy seconds here at the cost of ordering logic
//
// 2. What is Vec::with_capacity?
//    - Pre-allocates space for the elements we know are coming
//    - Avoids re-allocating as the vector grows
//
// 3. Why does readme_for not return Result?
//    - A missing README is a normal outcome, not an error
//    - Returning the enum directly makes "this can't fail the run"
//      visible in the signature
//
// 4. What is unwrap_or_default()?
//    - Turns Option<String> into String, using "" for None
//    - The API sends null descriptions; our output promises a string
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use mockito::{Matcher, Server, ServerGuard};

    // Builds a collector aimed at the mock server
    fn collector_for(server: &ServerGuard, options: CollectOptions) -> RepositorySummaryCollector {
        let config = Config {
            token: "test-token".to_string(),
            api_base: server.url(),
        };
        let client = GitHubClient::new(&config).unwrap();
        RepositorySummaryCollector::new(client, options)
    }

    // One repository record the way the listing endpoints shape it
    fn repo_json(owner: &str, name: &str, private: bool) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "full_name": format!("{owner}/{name}"),
            "html_url": format!("https://github.com/{owner}/{name}"),
            "description": "A test repository",
            "private": private,
            "owner": { "login": owner }
        })
    }

    // A README response body with the given decoded text
    fn readme_body(text: &str) -> String {
        serde_json::json!({
            "content": STANDARD.encode(text.as_bytes()),
            "encoding": "base64"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_one_summary_per_repo_in_listing_order() {
        let mut server = Server::new_async().await;

        let listing = serde_json::json!([
            repo_json("octocat", "alpha", false),
            repo_json("octocat", "beta", false),
        ]);
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;

        server
            .mock("GET", "/repos/octocat/alpha/readme")
            .with_status(200)
            .with_body(readme_body("# Alpha"))
            .create_async()
            .await;
        server
            .mock("GET", "/repos/octocat/beta/readme")
            .with_status(200)
            .with_body(readme_body("# Beta"))
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let summaries = collector.collect("https://github.com/octocat").await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "alpha");
        assert_eq!(summaries[1].name, "beta");
        assert_eq!(summaries[0].url, "https://github.com/octocat/alpha");
        assert_eq!(
            summaries[0].readme,
            ReadmeContent::Present("# Alpha".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_readme_degrades_to_unavailable() {
        let mut server = Server::new_async().await;

        let listing = serde_json::json!([repo_json("octocat", "no-docs", false)]);
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;

        server
            .mock("GET", "/repos/octocat/no-docs/readme")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let summaries = collector.collect("octocat").await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].readme, ReadmeContent::Unavailable);
        assert!(!summaries[0].has_readme());
    }

    #[tokio::test]
    async fn test_scenario_two_repos_one_readme_missing() {
        // Account with 2 repos: repo A has a 50-char README (limit 500),
        // repo B's README endpoint answers 404
        let mut server = Server::new_async().await;

        let listing = serde_json::json!([
            repo_json("octocat", "a", false),
            repo_json("octocat", "b", false),
        ]);
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;

        let fifty_chars = "x".repeat(50);
        server
            .mock("GET", "/repos/octocat/a/readme")
            .with_status(200)
            .with_body(readme_body(&fifty_chars))
            .create_async()
            .await;
        server
            .mock("GET", "/repos/octocat/b/readme")
            .with_status(404)
            .create_async()
            .await;

        let options = CollectOptions {
            preview_limit: Some(500),
            ..Default::default()
        };
        let collector = collector_for(&server, options);
        let summaries = collector.collect("octocat").await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(
            summaries[0].readme,
            ReadmeContent::Present(fifty_chars) // under the limit: unchanged
        );
        assert_eq!(summaries[1].readme, ReadmeContent::Unavailable);
    }

    #[tokio::test]
    async fn test_own_account_uses_authenticated_listing() {
        let mut server = Server::new_async().await;

        // The token belongs to "OctoCat"; the user asked for "octocat".
        // Case-insensitive match -> the /user/repos endpoint must be used.
        let identity = server
            .mock("GET", "/user")
            .with_status(200)
            .with_body(r#"{"login": "OctoCat"}"#)
            .create_async()
            .await;

        let listing = serde_json::json!([repo_json("OctoCat", "secret-plans", true)]);
        let own_repos = server
            .mock("GET", "/user/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;

        // The public endpoint must not be touched
        let public_repos = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        server
            .mock("GET", "/repos/OctoCat/secret-plans/readme")
            .with_status(404)
            .create_async()
            .await;

        let options = CollectOptions {
            include_private: true,
            ..Default::default()
        };
        let collector = collector_for(&server, options);
        let summaries = collector.collect("https://github.com/octocat/").await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].private);
        identity.assert_async().await;
        own_repos.assert_async().await;
        public_repos.assert_async().await;
    }

    #[tokio::test]
    async fn test_other_account_uses_public_listing() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/user")
            .with_status(200)
            .with_body(r#"{"login": "someone-else"}"#)
            .create_async()
            .await;

        let public_repos = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let own_repos = server
            .mock("GET", "/user/repos")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let options = CollectOptions {
            include_private: true,
            ..Default::default()
        };
        let collector = collector_for(&server, options);
        let summaries = collector.collect("octocat").await.unwrap();

        assert!(summaries.is_empty());
        public_repos.assert_async().await;
        own_repos.assert_async().await;
    }

    #[tokio::test]
    async fn test_public_only_run_never_resolves_identity() {
        let mut server = Server::new_async().await;

        let identity = server
            .mock("GET", "/user")
            .expect(0)
            .create_async()
            .await;

        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        collector.collect("octocat").await.unwrap();

        identity.assert_async().await;
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let mut server = Server::new_async().await;

        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body(r#"{"message": "boom"}"#)
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let result = collector.collect("octocat").await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("500"), "error should carry the status: {err}");
        assert!(err.contains("boom"), "error should carry the body: {err}");
    }

    #[tokio::test]
    async fn test_null_description_becomes_empty_string() {
        let mut server = Server::new_async().await;

        let listing = serde_json::json!([{
            "name": "quiet",
            "full_name": "octocat/quiet",
            "html_url": "https://github.com/octocat/quiet",
            "description": null,
            "private": false,
            "owner": { "login": "octocat" }
        }]);
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/repos/octocat/quiet/readme")
            .with_status(404)
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let summaries = collector.collect("octocat").await.unwrap();

        assert_eq!(summaries[0].description, "");
    }

    #[tokio::test]
    async fn test_pagination_follows_until_short_page() {
        let mut server = Server::new_async().await;

        // Page 1 is full (100 entries), page 2 has a single entry
        let page1: Vec<serde_json::Value> = (0..PAGE_SIZE)
            .map(|i| repo_json("octocat", &format!("repo-{i}"), false))
            .collect();
        let page2 = vec![repo_json("octocat", "repo-last", false)];

        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(serde_json::json!(page1).to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(serde_json::json!(page2).to_string())
            .create_async()
            .await;

        // No READMEs anywhere; every record degrades, none abort
        server
            .mock("GET", Matcher::Regex(r"^/repos/octocat/.+/readme$".to_string()))
            .with_status(404)
            .expect(PAGE_SIZE + 1)
            .create_async()
            .await;

        let options = CollectOptions {
            paginate: true,
            ..Default::default()
        };
        let collector = collector_for(&server, options);
        let summaries = collector.collect("octocat").await.unwrap();

        assert_eq!(summaries.len(), PAGE_SIZE + 1);
        assert_eq!(summaries.last().unwrap().name, "repo-last");
    }

    #[tokio::test]
    async fn test_single_page_without_paginate_flag() {
        let mut server = Server::new_async().await;

        // A full page, but pagination is off: page 2 must not be requested
        let page1: Vec<serde_json::Value> = (0..PAGE_SIZE)
            .map(|i| repo_json("octocat", &format!("repo-{i}"), false))
            .collect();

        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(serde_json::json!(page1).to_string())
            .create_async()
            .await;
        let page2 = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
            .expect(0)
            .create_async()
            .await;

        server
            .mock("GET", Matcher::Regex(r"^/repos/octocat/.+/readme$".to_string()))
            .with_status(404)
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let summaries = collector.collect("octocat").await.unwrap();

        assert_eq!(summaries.len(), PAGE_SIZE);
        page2.assert_async().await;
    }

    #[tokio::test]
    async fn test_summary_json_shape() {
        let mut server = Server::new_async().await;

        let listing = serde_json::json!([repo_json("octocat", "alpha", false)]);
        server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(listing.to_string())
            .create_async()
            .await;
        server
            .mock("GET", "/repos/octocat/alpha/readme")
            .with_status(200)
            .with_body(readme_body("# Alpha"))
            .create_async()
            .await;

        let collector = collector_for(&server, CollectOptions::default());
        let summaries = collector.collect("octocat").await.unwrap();

        // The readme enum flattens into the record
        let value = serde_json::to_value(&summaries[0]).unwrap();
        assert_eq!(value["name"], "alpha");
        assert_eq!(value["readme_status"], "present");
        assert_eq!(value["readme"], "# Alpha");
    }
}
