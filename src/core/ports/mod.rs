//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the labeling logic and the
//! issue tracking service. Implementations live in the `adapters` module;
//! tests drive the core through in-memory implementations.

mod issue_tracker;

pub use issue_tracker::IssueTracker;
