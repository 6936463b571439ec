//! GitHub Actions runtime glue
//!
//! Workflow commands written to stdout, and the metadata of the current
//! workflow run used in failure reports.

use std::env;

/// Escape a message for use in a workflow command
#[must_use]
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` workflow command for a message
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Mark the step as failed
///
/// Emits the error annotation; the caller is responsible for exiting with a
/// non-zero status.
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}

/// Metadata of the workflow run, captured from the runner environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowRun {
    /// `GITHUB_WORKFLOW`
    pub workflow: Option<String>,
    /// `GITHUB_REPOSITORY`
    pub repository: Option<String>,
    /// `GITHUB_SERVER_URL`
    pub server_url: Option<String>,
    /// `GITHUB_RUN_ID`
    pub run_id: Option<String>,
}

impl WorkflowRun {
    /// Capture run metadata from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            workflow: var("GITHUB_WORKFLOW"),
            repository: var("GITHUB_REPOSITORY"),
            server_url: var("GITHUB_SERVER_URL"),
            run_id: var("GITHUB_RUN_ID"),
        }
    }

    /// Link to the run's log page, when all parts are known
    #[must_use]
    pub fn run_url(&self) -> Option<String> {
        match (&self.server_url, &self.repository, &self.run_id) {
            (Some(server), Some(repo), Some(id)) => {
                Some(format!("{}/{repo}/actions/runs/{id}", server.trim_end_matches('/')))
            },
            _ => None,
        }
    }
}

/// Body of the comment posted to the error-tracking issue
#[must_use]
pub fn error_report_body(message: &str, run: &WorkflowRun) -> String {
    let unknown = "unknown";
    let mut body = format!(
        "Workflow: {}\n\nRepo: {}\n\n",
        run.workflow.as_deref().unwrap_or(unknown),
        run.repository.as_deref().unwrap_or(unknown),
    );
    if let Some(url) = run.run_url() {
        body.push_str(&format!("Run: {url}\n\n"));
    }
    body.push_str(&format!("Error:\n```\n{message}\n```\n"));
    body
}
