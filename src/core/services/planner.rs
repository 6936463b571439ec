//! Action planning
//!
//! Turns a predicted label and its configured behaviour into the list of
//! calls to make against the issue.

use std::fmt;

use serde::Serialize;

use crate::core::models::LabelBehavior;

/// A single side-effecting call against an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum IssueAction {
    /// Add this label
    AddLabel(String),
    /// Post this comment
    PostComment(String),
    /// Assign this user
    AddAssignee(String),
}

impl fmt::Display for IssueAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddLabel(label) => write!(f, "add label '{label}'"),
            Self::PostComment(_) => write!(f, "post comment"),
            Self::AddAssignee(user) => write!(f, "assign '{user}'"),
        }
    }
}

/// Plan the calls for a label
///
/// The returned order carries no meaning; the calls are issued together.
#[must_use]
pub fn plan_actions(label: &str, behavior: &LabelBehavior) -> Vec<IssueAction> {
    let mut actions = Vec::with_capacity(2 + behavior.assign.len());

    if !behavior.skip_labeling {
        actions.push(IssueAction::AddLabel(label.to_string()));
    }

    if let Some(comment) = behavior.comment() {
        actions.push(IssueAction::PostComment(comment.to_string()));
    }

    actions.extend(behavior.assign.iter().cloned().map(IssueAction::AddAssignee));

    actions
}
