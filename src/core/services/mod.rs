//! Business logic services
//!
//! - [`eligibility`] - Decide whether an entry may be acted on (pure)
//! - [`planner`] - Turn a label and its behaviour into calls (pure)
//! - [`applier`] - Drive an [`IssueTracker`](crate::core::ports::IssueTracker)
//!   through the entries

pub mod applier;
pub mod eligibility;
pub mod planner;

pub use applier::{EntryOutcome, EntryStatus, apply_labels};
pub use eligibility::{Eligibility, SkipReason, evaluate};
pub use planner::{IssueAction, plan_actions};
