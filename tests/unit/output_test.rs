//! Tests for run report rendering

use apply_labels::core::services::{EntryOutcome, EntryStatus, IssueAction, SkipReason};
use apply_labels::output::RunReport;

fn applied(number: u64, label: &str, actions: Vec<IssueAction>) -> EntryOutcome {
    EntryOutcome {
        number,
        status: EntryStatus::Applied {
            label: label.to_string(),
            actions,
        },
    }
}

fn skipped(number: u64, reason: SkipReason) -> EntryOutcome {
    EntryOutcome {
        number,
        status: EntryStatus::Skipped { reason },
    }
}

#[test]
fn test_report_counts() {
    let report = RunReport::new(vec![
        applied(1, "bug", vec![IssueAction::AddLabel("bug".to_string())]),
        skipped(2, SkipReason::AlreadyAssigned),
        skipped(3, SkipReason::HasComments { comments: 2 }),
    ]);

    assert_eq!(report.processed, 3);
    assert_eq!(report.applied, 1);
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_empty_report_human() {
    let report = RunReport::new(Vec::new());
    assert_eq!(report.to_human(), "No classifications to apply.\n");
}

#[test]
fn test_human_lists_each_entry() {
    let report = RunReport::new(vec![
        applied(
            1,
            "bug",
            vec![
                IssueAction::AddLabel("bug".to_string()),
                IssueAction::AddAssignee("alice".to_string()),
            ],
        ),
        skipped(2, SkipReason::AlreadyAssigned),
        applied(3, "perf", Vec::new()),
    ]);

    let text = report.to_human();
    assert!(text.starts_with("Processed 3 issue(s): 2 acted on, 1 skipped"));
    assert!(text.contains("bug: add label 'bug', assign 'alice'"));
    assert!(text.contains("skipped (already assigned)"));
    assert!(text.contains("perf: nothing to do"));
}

#[test]
fn test_json_shape() {
    let report = RunReport::new(vec![
        applied(1, "bug", vec![IssueAction::PostComment("thanks".to_string())]),
        skipped(
            2,
            SkipReason::DisallowedLabel {
                label: "freeze".to_string(),
            },
        ),
    ]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["processed"], 2);
    assert_eq!(json["outcomes"][0]["number"], 1);
    assert_eq!(json["outcomes"][0]["status"], "applied");
    assert_eq!(json["outcomes"][0]["actions"][0]["action"], "post_comment");
    assert_eq!(json["outcomes"][0]["actions"][0]["value"], "thanks");
    assert_eq!(json["outcomes"][1]["status"], "skipped");
    assert_eq!(json["outcomes"][1]["reason"]["kind"], "disallowed_label");
    assert_eq!(json["outcomes"][1]["reason"]["label"], "freeze");
}
