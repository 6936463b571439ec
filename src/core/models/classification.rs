//! Classification entries produced by the upstream classifier

use serde::{Deserialize, Serialize};

/// One issue and the labels the classifier predicted for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    /// Issue number
    pub number: u64,
    /// Predicted labels, in classifier order
    #[serde(default)]
    pub labels: Vec<String>,
}

impl ClassificationEntry {
    /// Create a new entry
    #[must_use]
    pub fn new<S: Into<String>>(number: u64, labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            number,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The label to apply, if the prediction is unambiguous
    ///
    /// Only defined when exactly one non-empty label was predicted.
    #[must_use]
    pub fn candidate_label(&self) -> Option<&str> {
        match self.labels.as_slice() {
            [label] if !label.is_empty() => Some(label),
            _ => None,
        }
    }
}
