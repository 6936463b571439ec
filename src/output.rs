//! Output formatting for human and JSON modes
//!
//! The run summary can be rendered either as human-readable text or as
//! machine-parseable JSON.

use serde::Serialize;

use crate::core::services::{EntryOutcome, EntryStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Entries read from the classification artifact
    pub processed: usize,
    /// Entries acted on
    pub applied: usize,
    /// Entries left alone
    pub skipped: usize,
    /// Per-entry outcomes, in input order
    pub outcomes: Vec<EntryOutcome>,
}

impl RunReport {
    /// Build a report from per-entry outcomes
    #[must_use]
    pub fn new(outcomes: Vec<EntryOutcome>) -> Self {
        let applied = outcomes.iter().filter(|o| o.is_applied()).count();
        Self {
            processed: outcomes.len(),
            applied,
            skipped: outcomes.len() - applied,
            outcomes,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.processed == 0 {
            return "No classifications to apply.\n".to_string();
        }

        let mut out = format!(
            "Processed {} issue(s): {} acted on, {} skipped\n",
            self.processed, self.applied, self.skipped
        );

        for outcome in &self.outcomes {
            let line = match &outcome.status {
                EntryStatus::Applied { label, actions } if actions.is_empty() => {
                    format!("  #{:<8} {label}: nothing to do", outcome.number)
                },
                EntryStatus::Applied { label, actions } => {
                    let actions: Vec<String> = actions.iter().map(ToString::to_string).collect();
                    format!("  #{:<8} {label}: {}", outcome.number, actions.join(", "))
                },
                EntryStatus::Skipped { reason } => {
                    format!("  #{:<8} skipped ({reason})", outcome.number)
                },
            };
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
