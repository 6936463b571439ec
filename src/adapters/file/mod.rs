//! File-based inputs
//!
//! Loads the classification artifact from the local filesystem.

mod classifications;

pub use classifications::{DEFAULT_LABELS_FILE, load_classifications, parse_classifications};
