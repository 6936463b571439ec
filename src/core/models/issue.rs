//! Live issue state

use serde::Serialize;

/// The parts of an issue's current state that decide eligibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueSnapshot {
    /// Issue number
    pub number: u64,
    /// Whether anyone is assigned
    pub has_assignee: bool,
    /// Number of comments
    pub num_comments: u64,
    /// Names of the labels currently on the issue
    pub labels: Vec<String>,
}

impl IssueSnapshot {
    /// A fresh issue: unassigned, no comments, no labels
    #[must_use]
    pub const fn untouched(number: u64) -> Self {
        Self {
            number,
            has_assignee: false,
            num_comments: 0,
            labels: Vec::new(),
        }
    }
}
