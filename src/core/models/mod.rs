//! Domain models for apply-labels
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ClassificationEntry`] - "The classifier thinks issue N is a `bug`"
//! - [`ClassifierConfig`] - What to do for each predicted label
//! - [`IssueSnapshot`] - The live state of an issue
//! - [`AllowList`] - Labels that may already be on an eligible issue
//! - [`RepoRef`] / [`IssueLocator`] - Where things live

mod allow_list;
mod behavior;
mod classification;
mod issue;
mod rate_limit;
mod repo;

pub use allow_list::AllowList;
pub use behavior::{ClassifierConfig, LabelBehavior};
pub use classification::ClassificationEntry;
pub use issue::IssueSnapshot;
pub use rate_limit::RateLimitStatus;
pub use repo::{IssueLocator, ParseRefError, RepoRef};
