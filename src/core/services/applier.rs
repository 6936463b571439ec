//! Label applier
//!
//! Walks the classification entries in order, one issue at a time. For each
//! eligible issue the planned calls are issued together and all of them are
//! awaited before moving on, whether they succeed or not. The first error
//! ends the run; nothing after the failing issue is touched.

use anyhow::Context;
use futures::future::join_all;
use log::{debug, info};
use serde::Serialize;

use super::eligibility::{self, Eligibility, SkipReason};
use super::planner::{self, IssueAction};
use crate::core::models::{AllowList, ClassificationEntry, ClassifierConfig};
use crate::core::ports::IssueTracker;

/// What happened to one classification entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    /// Issue number
    pub number: u64,
    /// Applied or skipped
    #[serde(flatten)]
    pub status: EntryStatus,
}

/// Result of processing an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    /// All planned calls succeeded
    Applied {
        /// The predicted label
        label: String,
        /// Calls that were made
        actions: Vec<IssueAction>,
    },
    /// The entry was left alone
    Skipped {
        /// Why
        reason: SkipReason,
    },
}

impl EntryOutcome {
    /// Whether the entry was acted on
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self.status, EntryStatus::Applied { .. })
    }
}

/// Apply predicted labels to every eligible issue
///
/// Returns one outcome per entry, in input order. Any tracker error aborts
/// the run and is returned with the issue number attached.
pub async fn apply_labels<T: IssueTracker + ?Sized>(
    tracker: &T,
    config: &ClassifierConfig,
    allow_list: &AllowList,
    entries: &[ClassificationEntry],
) -> anyhow::Result<Vec<EntryOutcome>> {
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        let issue = tracker
            .get_issue(entry.number)
            .await
            .with_context(|| format!("Failed to fetch issue #{}", entry.number))?;

        let label = match eligibility::evaluate(entry, &issue, allow_list) {
            Eligibility::Eligible(label) => label,
            Eligibility::Skip(reason) => {
                debug!("Skipping #{}: {reason}", entry.number);
                outcomes.push(EntryOutcome {
                    number: entry.number,
                    status: EntryStatus::Skipped { reason },
                });
                continue;
            },
        };

        let actions = planner::plan_actions(label, config.behavior_for(label));
        run_actions(tracker, entry.number, &actions).await?;

        info!("#{}: '{label}' ({} call(s))", entry.number, actions.len());
        outcomes.push(EntryOutcome {
            number: entry.number,
            status: EntryStatus::Applied {
                label: label.to_string(),
                actions,
            },
        });
    }

    Ok(outcomes)
}

/// Issue all calls for one issue together and wait for every one of them
///
/// A failing call does not cancel the others. If any failed, the error lists
/// each failed call.
async fn run_actions<T: IssueTracker + ?Sized>(
    tracker: &T,
    number: u64,
    actions: &[IssueAction],
) -> anyhow::Result<()> {
    let results = join_all(actions.iter().map(|action| perform(tracker, number, action))).await;

    let failures: Vec<String> = actions
        .iter()
        .zip(results)
        .filter_map(|(action, result)| result.err().map(|e| format!("{action}: {e:#}")))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!(
            "Failed to update issue #{number}: {}",
            failures.join("; ")
        )
    }
}

async fn perform<T: IssueTracker + ?Sized>(
    tracker: &T,
    number: u64,
    action: &IssueAction,
) -> anyhow::Result<()> {
    match action {
        IssueAction::AddLabel(label) => tracker.add_label(number, label).await,
        IssueAction::PostComment(body) => tracker.post_comment(number, body).await,
        IssueAction::AddAssignee(user) => tracker.add_assignee(number, user).await,
    }
}
