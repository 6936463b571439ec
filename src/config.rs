//! Run configuration
//!
//! Everything the labeler needs to know about a run is resolved once at
//! startup into a [`RunContext`] and passed explicitly from there on.

use std::fmt;
use std::path::PathBuf;

use crate::adapters::file::DEFAULT_LABELS_FILE;
use crate::adapters::github::DEFAULT_API_URL;
use crate::core::models::{AllowList, IssueLocator, RepoRef};

/// Issue that receives failure reports unless overridden
pub const DEFAULT_ERROR_ISSUE: &str = "microsoft/vscode-github-triage-actions#127";

/// Immutable inputs of a single run
#[derive(Clone)]
pub struct RunContext {
    /// API token
    pub token: String,
    /// Repository whose issues are labeled
    pub repo: RepoRef,
    /// Labels allowed to already be on an eligible issue
    pub allow_list: AllowList,
    /// Config name, read from `.github/<config_path>.json`
    pub config_path: String,
    /// Classification artifact
    pub labels_file: PathBuf,
    /// Where failure reports are posted
    pub error_issue: IssueLocator,
    /// API root
    pub api_url: String,
}

impl fmt::Debug for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunContext")
            .field("token", &"<redacted>")
            .field("repo", &self.repo)
            .field("allow_list", &self.allow_list)
            .field("config_path", &self.config_path)
            .field("labels_file", &self.labels_file)
            .field("error_issue", &self.error_issue)
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl RunContext {
    /// Create a context with the default artifact path, error issue and API
    #[must_use]
    pub fn new(
        token: impl Into<String>,
        repo: RepoRef,
        allow_list: AllowList,
        config_path: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            repo,
            allow_list,
            config_path: config_path.into(),
            labels_file: PathBuf::from(DEFAULT_LABELS_FILE),
            error_issue: default_error_issue(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Read classifications from another file
    #[must_use]
    pub fn with_labels_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.labels_file = path.into();
        self
    }

    /// Post failure reports to another issue
    #[must_use]
    pub fn with_error_issue(mut self, issue: IssueLocator) -> Self {
        self.error_issue = issue;
        self
    }

    /// Use another API root
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }
}

fn default_error_issue() -> IssueLocator {
    IssueLocator {
        repo: RepoRef::new("microsoft", "vscode-github-triage-actions"),
        number: 127,
    }
}
