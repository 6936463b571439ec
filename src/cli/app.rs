//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use apply_labels::actions::{self, WorkflowRun};
use apply_labels::adapters::file::DEFAULT_LABELS_FILE;
use apply_labels::adapters::github::{DEFAULT_API_URL, GitHubClient};
use apply_labels::config::{DEFAULT_ERROR_ISSUE, RunContext};
use apply_labels::core::models::{AllowList, IssueLocator, RepoRef};
use apply_labels::output::{OutputMode, RunReport};
use apply_labels::run::run_and_report;

/// apply-labels - Apply classifier-predicted labels to GitHub issues
#[derive(Parser, Debug)]
#[command(
    name = "apply-labels",
    version,
    about = "Apply classifier-predicted labels to GitHub issues",
    long_about = "Apply classifier-predicted labels to GitHub issues.\n\n\
                  Reads the classifier output, skips issues that already have an assignee,\n\
                  comments, or labels outside the allow-list, then adds the predicted label,\n\
                  comment and assignees configured for it."
)]
pub struct Cli {
    /// GitHub token
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Pipe-delimited labels that may already be on an issue (e.g. "bug|question")
    #[arg(long = "allow-labels", env = "INPUT_ALLOWLABELS")]
    pub allow_labels: AllowList,

    /// Classifier config name, read from .github/<config-path>.json
    #[arg(long = "config-path", env = "INPUT_CONFIG-PATH")]
    pub config_path: String,

    /// Repository to label (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: RepoRef,

    /// Classification results written by the classifier
    #[arg(long = "labels-file", default_value = DEFAULT_LABELS_FILE)]
    pub labels_file: PathBuf,

    /// Issue that receives failure reports (owner/name#number)
    #[arg(long = "error-issue", default_value = DEFAULT_ERROR_ISSUE)]
    pub error_issue: IssueLocator,

    /// GitHub API root
    #[arg(long = "api-url", env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    fn into_context(self) -> RunContext {
        RunContext::new(self.token, self.repo, self.allow_labels, self.config_path)
            .with_labels_file(self.labels_file)
            .with_error_issue(self.error_issue)
            .with_api_url(self.api_url)
    }
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let ctx = cli.into_context();
    debug!("{ctx:?}");

    match execute(&ctx, &WorkflowRun::from_env()) {
        Ok(report) => {
            report.render(output_mode);
            ExitCode::SUCCESS
        },
        Err(err) => {
            actions::set_failed(&format!("{err:#}"));
            ExitCode::FAILURE
        },
    }
}

fn execute(ctx: &RunContext, workflow: &WorkflowRun) -> anyhow::Result<RunReport> {
    let client =
        GitHubClient::new(ctx.token.clone(), ctx.repo.clone())?.with_base_url(ctx.api_url.clone());

    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(run_and_report(&client, ctx, workflow))
}
