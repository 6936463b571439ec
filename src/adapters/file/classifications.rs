//! Classification artifact loader
//!
//! Reads the JSON array written by the classification stage:
//!
//! ```json
//! [{ "number": 1234, "labels": ["bug"] }, { "number": 1235, "labels": [] }]
//! ```

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::core::models::ClassificationEntry;

/// Default artifact path, relative to the working directory
pub const DEFAULT_LABELS_FILE: &str = "issue_labels.json";

/// Load classification entries, preserving file order
pub fn load_classifications(path: &Path) -> anyhow::Result<Vec<ClassificationEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read classifications from {}", path.display()))?;
    parse_classifications(&content)
        .with_context(|| format!("Invalid classifications in {}", path.display()))
}

/// Parse classification entries from JSON text
pub fn parse_classifications(content: &str) -> anyhow::Result<Vec<ClassificationEntry>> {
    Ok(serde_json::from_str(content)?)
}
