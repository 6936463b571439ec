//! Argument handling of the apply-labels binary

use assert_cmd::cargo;
use predicates::prelude::*;

fn apply_labels() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("apply-labels"));
    cmd.env_clear();
    cmd
}

#[test]
fn test_version() {
    apply_labels()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply-labels"));
}

#[test]
fn test_help() {
    apply_labels()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--allow-labels"))
        .stdout(predicate::str::contains("INPUT_CONFIG-PATH"));
}

#[test]
fn test_token_is_required() {
    apply_labels()
        .args(["--allow-labels", "bug", "--config-path", "classifier", "--repo", "o/r"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--token"));
}

#[test]
fn test_inputs_read_from_action_env() {
    // Everything but the repository comes from INPUT_*
    apply_labels()
        .env("INPUT_TOKEN", "t")
        .env("INPUT_ALLOWLABELS", "bug|perf")
        .env("INPUT_CONFIG-PATH", "classifier")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"))
        .stderr(predicate::str::contains("--repo <REPO>"));
}

#[test]
fn test_invalid_repo_rejected() {
    apply_labels()
        .args([
            "--token",
            "t",
            "--allow-labels",
            "bug",
            "--config-path",
            "classifier",
            "--repo",
            "not-a-repo",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected owner/name"));
}

#[test]
fn test_invalid_error_issue_rejected() {
    apply_labels()
        .args([
            "--token",
            "t",
            "--allow-labels",
            "bug",
            "--config-path",
            "classifier",
            "--repo",
            "o/r",
            "--error-issue",
            "o/r",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected owner/name#number"));
}
