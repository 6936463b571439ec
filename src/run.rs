//! A complete labeling run
//!
//! Loads the classifier config and the classification artifact, applies
//! labels, and logs quota usage. A failed run is reported as a comment on
//! the error-tracking issue before the error is handed back.

use log::{error, info, warn};

use crate::actions::{self, WorkflowRun};
use crate::adapters::file::load_classifications;
use crate::config::RunContext;
use crate::core::ports::IssueTracker;
use crate::core::services::apply_labels;
use crate::output::RunReport;

/// Run the labeler once
///
/// Quota usage is logged only after every entry has been processed.
pub async fn run<T: IssueTracker + ?Sized>(
    tracker: &T,
    ctx: &RunContext,
) -> anyhow::Result<RunReport> {
    let config = tracker.read_config(&ctx.config_path).await?;
    let entries = load_classifications(&ctx.labels_file)?;
    info!(
        "Applying {} classification(s) to {} ({} configured label(s))",
        entries.len(),
        ctx.repo,
        config.len()
    );

    let outcomes = apply_labels(tracker, &config, &ctx.allow_list, &entries).await?;
    let report = RunReport::new(outcomes);

    let quota = tracker.rate_limit().await?;
    info!("{}", quota.summary());

    Ok(report)
}

/// Run the labeler and report a failure to the error-tracking issue
///
/// The original error is always returned; a failure to post the report is
/// only logged.
pub async fn run_and_report<T: IssueTracker + ?Sized>(
    tracker: &T,
    ctx: &RunContext,
    workflow: &WorkflowRun,
) -> anyhow::Result<RunReport> {
    match run(tracker, ctx).await {
        Ok(report) => Ok(report),
        Err(err) => {
            let message = format!("{err:#}");
            error!("{message}");

            let body = actions::error_report_body(&message, workflow);
            if let Err(report_err) = tracker.comment_on(&ctx.error_issue, &body).await {
                warn!("Could not report failure to {}: {report_err:#}", ctx.error_issue);
            }

            Err(err)
        },
    }
}
