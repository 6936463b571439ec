//! apply-labels - Apply classifier-predicted labels to GitHub issues
//!
//! Runs as a GitHub Actions step after the issue classifier: reads its
//! predictions and labels, comments on, and assigns the issues it is
//! confident about.

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

use std::process::ExitCode;

mod cli;

/// Main entry point for the apply-labels CLI
fn main() -> ExitCode {
    cli::run()
}
