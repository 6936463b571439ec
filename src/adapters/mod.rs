//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GitHub REST client implementing `IssueTracker`
//! - `file/` - Classification artifact loading

pub mod file;
pub mod github;
