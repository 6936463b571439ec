//! Issue tracker port
//!
//! Defines the interface for reading and mutating issues.

use async_trait::async_trait;

use super::super::models::{ClassifierConfig, IssueLocator, IssueSnapshot, RateLimitStatus};

/// Issue tracking service abstraction
///
/// Implementations are scoped to one repository; every `number` refers to
/// an issue in that repository. [`IssueTracker::comment_on`] is the only
/// operation that can reach another repository.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetch the current state of an issue
    async fn get_issue(&self, number: u64) -> anyhow::Result<IssueSnapshot>;

    /// Add a label to an issue
    async fn add_label(&self, number: u64, label: &str) -> anyhow::Result<()>;

    /// Post a comment on an issue
    async fn post_comment(&self, number: u64, body: &str) -> anyhow::Result<()>;

    /// Add a user as an assignee
    async fn add_assignee(&self, number: u64, assignee: &str) -> anyhow::Result<()>;

    /// Read the classifier configuration stored in the repository
    async fn read_config(&self, path: &str) -> anyhow::Result<ClassifierConfig>;

    /// Current API quota usage
    async fn rate_limit(&self) -> anyhow::Result<RateLimitStatus>;

    /// Post a comment on an issue anywhere (used for failure reports)
    async fn comment_on(&self, issue: &IssueLocator, body: &str) -> anyhow::Result<()>;
}
