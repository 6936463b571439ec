//! # GitHub REST client
//!
//! A repository-scoped [`IssueTracker`] over the GitHub REST API.
//! Every request carries the bearer token, the JSON media type and a pinned
//! API version. Non-success responses become [`GitHubError::Api`] with
//! GitHub's own error message.

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, Response, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::GitHubError;
use super::types::{
    AddAssigneesRequest, AddLabelsRequest, ApiErrorBody, CommentRequest, ContentResponse,
    IssueResponse, RateLimitResponse,
};
use crate::core::models::{
    ClassifierConfig, IssueLocator, IssueSnapshot, RateLimitStatus, RepoRef,
};
use crate::core::ports::IssueTracker;

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("apply-labels/", env!("CARGO_PKG_VERSION"));

/// GitHub API client bound to one repository
#[derive(Clone)]
pub struct GitHubClient {
    http_client: HttpClient,
    base_url: String,
    token: String,
    repo: RepoRef,
}

impl fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client for `repo` against the public API
    pub fn new(token: impl Into<String>, repo: RepoRef) -> Result<Self, GitHubError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_API_URL.to_string(),
            token: token.into(),
            repo,
        })
    }

    /// Point the client at another API root (GitHub Enterprise, tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn repo_url(&self, repo: &RepoRef, path: &str) -> String {
        format!("{}/repos/{}/{}/{path}", self.base_url, repo.owner, repo.name)
    }

    fn issue_url(&self, number: u64, suffix: &str) -> String {
        self.repo_url(&self.repo, &format!("issues/{number}{suffix}"))
    }

    /// Send a request and turn error statuses into [`GitHubError::Api`]
    async fn send(&self, request: RequestBuilder) -> Result<Response, GitHubError> {
        let response = request
            .bearer_auth(&self.token)
            .header(header::ACCEPT, MEDIA_TYPE)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.json::<ApiErrorBody>().await.map_or_else(
            |_| status.canonical_reason().unwrap_or("unknown error").to_string(),
            |body| body.message,
        );
        Err(GitHubError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        debug!("GET {url}");
        let response = self.send(self.http_client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + Sync>(&self, url: &str, body: &B) -> Result<(), GitHubError> {
        debug!("POST {url}");
        self.send(self.http_client.post(url).json(body)).await?;
        Ok(())
    }

    /// Fetch an issue's live state
    pub async fn fetch_issue(&self, number: u64) -> Result<IssueSnapshot, GitHubError> {
        let issue: IssueResponse = self.get_json(&self.issue_url(number, "")).await?;
        Ok(issue.into())
    }

    /// Read `.github/<path>.json` from the default branch and parse it
    pub async fn fetch_config<T: DeserializeOwned>(&self, path: &str) -> Result<T, GitHubError> {
        let repo_path = format!(".github/{path}.json");
        let content: ContentResponse = self
            .get_json(&self.repo_url(&self.repo, &format!("contents/{repo_path}")))
            .await?;

        let bytes = decode_file_content(&repo_path, content)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Core REST quota
    pub async fn fetch_rate_limit(&self) -> Result<RateLimitStatus, GitHubError> {
        let response: RateLimitResponse =
            self.get_json(&format!("{}/rate_limit", self.base_url)).await?;
        Ok(response.resources.core)
    }
}

/// Extract the raw bytes of a contents-API file response
fn decode_file_content(path: &str, content: ContentResponse) -> Result<Vec<u8>, GitHubError> {
    if content.kind != "file" {
        return Err(GitHubError::Content {
            path: path.to_string(),
            reason: format!("found {} where a file was expected", content.kind),
        });
    }

    match (content.encoding.as_deref(), content.content) {
        (Some("base64"), Some(encoded)) if !encoded.is_empty() => {
            // GitHub wraps the payload at 60 columns
            let encoded: String = encoded.split_whitespace().collect();
            Ok(STANDARD.decode(encoded)?)
        },
        (encoding, _) => Err(GitHubError::Content {
            path: path.to_string(),
            reason: format!("unsupported encoding {}", encoding.unwrap_or("none")),
        }),
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn get_issue(&self, number: u64) -> anyhow::Result<IssueSnapshot> {
        Ok(self.fetch_issue(number).await?)
    }

    async fn add_label(&self, number: u64, label: &str) -> anyhow::Result<()> {
        self.post_json(&self.issue_url(number, "/labels"), &AddLabelsRequest { labels: [label] })
            .await
            .with_context(|| format!("Failed to add label '{label}' to #{number}"))
    }

    async fn post_comment(&self, number: u64, body: &str) -> anyhow::Result<()> {
        self.post_json(&self.issue_url(number, "/comments"), &CommentRequest { body })
            .await
            .with_context(|| format!("Failed to comment on #{number}"))
    }

    async fn add_assignee(&self, number: u64, assignee: &str) -> anyhow::Result<()> {
        self.post_json(
            &self.issue_url(number, "/assignees"),
            &AddAssigneesRequest {
                assignees: [assignee],
            },
        )
        .await
        .with_context(|| format!("Failed to assign '{assignee}' to #{number}"))
    }

    async fn read_config(&self, path: &str) -> anyhow::Result<ClassifierConfig> {
        self.fetch_config(path)
            .await
            .with_context(|| format!("Failed to read config '{path}' from {}", self.repo))
    }

    async fn rate_limit(&self) -> anyhow::Result<RateLimitStatus> {
        Ok(self.fetch_rate_limit().await?)
    }

    async fn comment_on(&self, issue: &IssueLocator, body: &str) -> anyhow::Result<()> {
        let url = self.repo_url(&issue.repo, &format!("issues/{}/comments", issue.number));
        self.post_json(&url, &CommentRequest { body })
            .await
            .with_context(|| format!("Failed to comment on {issue}"))
    }
}
