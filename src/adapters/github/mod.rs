//! GitHub issue tracker
//!
//! Implements `IssueTracker` over the GitHub REST API using reqwest.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::GitHubError;
