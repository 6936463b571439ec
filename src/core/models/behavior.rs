//! Per-label behaviour configuration
//!
//! The classifier config is a JSON object keyed by label name:
//!
//! ```json
//! {
//!   "bug": { "comment": "Thanks for the report!" },
//!   "perf": { "skipLabeling": true, "assign": ["alice"] }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// What to do when a label is predicted for an issue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelBehavior {
    /// Don't add the label itself (comment/assign still happen)
    #[serde(default)]
    pub skip_labeling: bool,
    /// Comment to post on the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Users to assign to the issue
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assign: Vec<String>,
}

static DEFAULT_BEHAVIOR: LabelBehavior = LabelBehavior {
    skip_labeling: false,
    comment: None,
    assign: Vec::new(),
};

impl LabelBehavior {
    /// The comment to post, ignoring empty strings
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}

/// Mapping from label name to its behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassifierConfig {
    behaviors: HashMap<String, LabelBehavior>,
}

impl ClassifierConfig {
    /// Create a config from `(label, behavior)` pairs
    #[must_use]
    pub fn from_entries<S: Into<String>>(
        entries: impl IntoIterator<Item = (S, LabelBehavior)>,
    ) -> Self {
        Self {
            behaviors: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Behaviour for a label; labels without an entry get the defaults
    #[must_use]
    pub fn behavior_for(&self, label: &str) -> &LabelBehavior {
        self.behaviors.get(label).unwrap_or(&DEFAULT_BEHAVIOR)
    }

    /// Number of labels with explicit behaviour
    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Whether no label has explicit behaviour
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}
