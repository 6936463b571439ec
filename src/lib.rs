//! apply-labels - Apply classifier-predicted labels to GitHub issues
//!
//! This library reads the output of an issue classifier, checks each issue's
//! live state, and adds the predicted label, a canned comment and assignees
//! according to a per-label configuration.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod actions;
pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod run;
