//! Label allow-list
//!
//! An issue stays eligible for auto-labeling only while every label already
//! on it is in the allow-list. The list is given as a single pipe-delimited
//! string, e.g. `"bug|feature-request|*english-please"`.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::str::FromStr;

/// Set of label names allowed to be present on an eligible issue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    labels: BTreeSet<String>,
}

impl AllowList {
    /// Parse a pipe-delimited list of label names
    ///
    /// Segments are taken verbatim; no trimming is applied.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self {
            labels: s.split('|').map(String::from).collect(),
        }
    }

    /// Whether a label is allowed
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// First label in `labels` that is not allowed, if any
    #[must_use]
    pub fn first_disallowed<'a>(&self, labels: &'a [String]) -> Option<&'a str> {
        labels
            .iter()
            .map(String::as_str)
            .find(|label| !self.contains(label))
    }

    /// Number of allowed labels
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromStr for AllowList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
