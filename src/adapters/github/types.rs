//! GitHub REST payloads
//!
//! Only the fields the labeler reads are modelled; everything else in the
//! responses is ignored.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::core::models::{IssueSnapshot, RateLimitStatus};

#[derive(Debug, Deserialize)]
pub(super) struct ApiErrorBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct LabelRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct IssueResponse {
    pub number: u64,
    #[serde(default)]
    pub assignee: Option<IgnoredAny>,
    #[serde(default)]
    pub assignees: Vec<IgnoredAny>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub labels: Vec<LabelRef>,
}

impl From<IssueResponse> for IssueSnapshot {
    fn from(issue: IssueResponse) -> Self {
        Self {
            number: issue.number,
            has_assignee: issue.assignee.is_some() || !issue.assignees.is_empty(),
            num_comments: issue.comments,
            labels: issue.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ContentResponse {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RateLimitResponse {
    pub resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
pub(super) struct RateLimitResources {
    pub core: RateLimitStatus,
}

#[derive(Debug, Serialize)]
pub(super) struct AddLabelsRequest<'a> {
    pub labels: [&'a str; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct AddAssigneesRequest<'a> {
    pub assignees: [&'a str; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct CommentRequest<'a> {
    pub body: &'a str,
}
