//! CLI layer for apply-labels
//!
//! - [`app`] - CLI definitions and entry point

pub mod app;

// Re-export main entry point
pub use app::run;
