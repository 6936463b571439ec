//! Integration tests for the apply-labels binary
//!
//! Runs the real binary against a local mock of the GitHub REST API,
//! covering the full cycle: read config → read classifications → label →
//! log quota, and the failure path that reports to the error issue.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create an apply-labels command pointed at `server`
fn apply_labels(server: &MockServer, labels_file: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("apply-labels"));
    cmd.env_clear()
        .env("INPUT_TOKEN", "test-token")
        .env("INPUT_ALLOWLABELS", "bug|feature-request")
        .env("INPUT_CONFIG-PATH", "classifier")
        .env("GITHUB_REPOSITORY", "octo/repo")
        .env("GITHUB_API_URL", server.uri())
        .arg("--labels-file")
        .arg(labels_file)
        .args(["--error-issue", "acme/triage#9"]);
    cmd
}

fn write_labels(dir: &TempDir, entries: &Value) -> std::path::PathBuf {
    let file = dir.path().join("issue_labels.json");
    fs::write(&file, entries.to_string()).unwrap();
    file
}

async fn mount_config(server: &MockServer, config: &Value) {
    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/contents/.github/classifier.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "file",
            "encoding": "base64",
            "content": STANDARD.encode(config.to_string())
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_issue(server: &MockServer, number: u64, issue: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/octo/repo/issues/{number}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(issue))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_rate_limit(server: &MockServer, times: u64) {
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": { "core": { "limit": 5000, "remaining": 4990, "used": 10, "reset": 0 } }
        })))
        .expect(times)
        .mount(server)
        .await;
}

fn clean_issue(number: u64) -> Value {
    json!({ "number": number, "assignee": null, "assignees": [], "comments": 0, "labels": [] })
}

// =============================================================================
// SUCCESSFUL RUN
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_full_run_applies_configured_behavior() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let labels_file = write_labels(
        &dir,
        &json!([
            { "number": 1, "labels": ["bug"] },
            { "number": 2, "labels": ["bug", "feature-request"] },
            { "number": 3, "labels": ["feature-request"] }
        ]),
    );

    mount_config(
        &server,
        &json!({
            "bug": { "comment": "thanks" },
            "feature-request": { "skipLabeling": true, "assign": ["alice"] }
        }),
    )
    .await;
    mount_issue(&server, 1, clean_issue(1)).await;
    mount_issue(&server, 2, clean_issue(2)).await;
    mount_issue(&server, 3, clean_issue(3)).await;
    mount_rate_limit(&server, 1).await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/repo/issues/1/labels"))
        .and(body_json(json!({ "labels": ["bug"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/repo/issues/1/comments"))
        .and(body_json(json!({ "body": "thanks" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/repo/issues/3/assignees"))
        .and(body_json(json!({ "assignees": ["alice"] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octo/repo/issues/3/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    apply_labels(&server, &labels_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 3 issue(s): 2 acted on, 1 skipped"))
        .stdout(predicate::str::contains("feature-request: assign 'alice'\n"))
        .stdout(predicate::str::contains("::error::").not());

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let labels_file = write_labels(&dir, &json!([{ "number": 1, "labels": ["bug"] }]));

    mount_config(&server, &json!({})).await;
    mount_issue(
        &server,
        1,
        json!({ "number": 1, "assignee": { "login": "bob" }, "comments": 0, "labels": [] }),
    )
    .await;
    mount_rate_limit(&server, 1).await;

    let output = apply_labels(&server, &labels_file)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["skipped"], 1);
    assert_eq!(report["outcomes"][0]["reason"]["kind"], "already_assigned");
}

// =============================================================================
// FAILED RUN
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_failure_marks_run_failed_and_reports() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let labels_file = write_labels(
        &dir,
        &json!([
            { "number": 1, "labels": ["bug"] },
            { "number": 2, "labels": ["bug"] }
        ]),
    );

    mount_config(&server, &json!({})).await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/issues/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "Server Error" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/repo/issues/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(clean_issue(2)))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/triage/issues/9/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    mount_rate_limit(&server, 0).await;

    apply_labels(&server, &labels_file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("::error::Failed to fetch issue #1"));

    let reports: Vec<Value> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/repos/acme/triage/issues/9/comments")
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect();
    assert_eq!(reports.len(), 1);
    assert!(reports[0]["body"].as_str().unwrap().contains("500 - Server Error"));

    server.verify().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_labels_file_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_config(&server, &json!({})).await;
    Mock::given(method("POST"))
        .and(path("/repos/acme/triage/issues/9/comments"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    apply_labels(&server, &dir.path().join("nope.json"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::Failed to read classifications"));

    server.verify().await;
}
