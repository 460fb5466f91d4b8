use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::paginator::{PageStop, Paged, Paginator};
use crate::models::{Commit, CommitSummary, DateWindow, RepoId, Repository};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("gitreporter/0.1"),
        );

        // No request timeout here; commit listing relies on transport defaults.
        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Commits of `repo` inside `window`, best effort: a failing page ends the
    /// listing and whatever was collected so far is returned with the reason.
    pub async fn fetch_commits(&self, repo: &RepoId, window: &DateWindow) -> Paged<Commit> {
        let url = format!("{}/repos/{}/{}/commits", self.base_url, repo.owner, repo.name);
        let query = [
            ("since", window.since_param()),
            ("until", window.until_param()),
        ];

        tracing::debug!("Fetching commits for: {}", repo);
        let paged: Paged<CommitSummary> = Paginator::new(&self.client)
            .fetch_all(&url, &query, PER_PAGE)
            .await;

        match &paged.stop {
            PageStop::Exhausted => {}
            PageStop::Conflict => tracing::debug!("{} has no commit history", repo),
            stop => tracing::warn!(
                "Stopped fetching commits for {} after {} item(s): {}",
                repo,
                paged.items.len(),
                stop
            ),
        }

        paged.map(|summary| Commit::from_summary(&summary, repo))
    }

    /// Repositories visible to the authenticated user, sorted by full name.
    pub async fn list_repositories(&self) -> Result<Vec<Repository>> {
        let url = format!("{}/user/repos", self.base_url);
        let query = [
            ("type", "all".to_string()),
            ("sort", "full_name".to_string()),
        ];

        tracing::info!("Fetching repositories for the authenticated user");
        let paged: Paged<Repository> = Paginator::new(&self.client)
            .fetch_all(&url, &query, PER_PAGE)
            .await;

        match paged.stop {
            PageStop::Exhausted => Ok(paged.items),
            stop => Err(Error::GitHubApi(format!(
                "Failed to list repositories: {}",
                stop
            ))),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
