//! Eligibility rules
//!
//! Decides whether a classification entry may be acted on, given the live
//! state of its issue. Pure logic, no I/O.

use std::fmt;

use serde::Serialize;

use crate::core::models::{AllowList, ClassificationEntry, IssueSnapshot};

/// Why an entry was left alone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// The classifier did not predict exactly one label
    AmbiguousPrediction {
        /// How many labels were predicted
        predicted: usize,
    },
    /// Someone is already assigned
    AlreadyAssigned,
    /// Someone already responded
    HasComments {
        /// Number of existing comments
        comments: u64,
    },
    /// The issue carries a label outside the allow-list
    DisallowedLabel {
        /// The offending label
        label: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousPrediction { predicted } => {
                write!(f, "{predicted} labels predicted, need exactly one")
            },
            Self::AlreadyAssigned => write!(f, "already assigned"),
            Self::HasComments { comments } => write!(f, "already has {comments} comment(s)"),
            Self::DisallowedLabel { label } => write!(f, "has label '{label}' not in allow-list"),
        }
    }
}

/// Outcome of the eligibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility<'a> {
    /// Act on the issue with this label
    Eligible(&'a str),
    /// Leave the issue alone
    Skip(SkipReason),
}

/// Check an entry against its issue's live state
///
/// Rules are checked in order and the first failing one is reported:
/// unambiguous prediction, no assignee, no comments, only allowed labels.
#[must_use]
pub fn evaluate<'a>(
    entry: &'a ClassificationEntry,
    issue: &IssueSnapshot,
    allow_list: &AllowList,
) -> Eligibility<'a> {
    let Some(label) = entry.candidate_label() else {
        return Eligibility::Skip(SkipReason::AmbiguousPrediction {
            predicted: entry.labels.len(),
        });
    };

    if issue.has_assignee {
        return Eligibility::Skip(SkipReason::AlreadyAssigned);
    }

    if issue.num_comments > 0 {
        return Eligibility::Skip(SkipReason::HasComments {
            comments: issue.num_comments,
        });
    }

    if let Some(disallowed) = allow_list.first_disallowed(&issue.labels) {
        return Eligibility::Skip(SkipReason::DisallowedLabel {
            label: disallowed.to_string(),
        });
    }

    Eligibility::Eligible(label)
}
