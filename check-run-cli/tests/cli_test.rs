use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use check_run_test_utils::fixtures::{check_run_body, check_suite_body, envelope, issue_comment_body};
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A `check-run` command with a clean environment and the given payload
fn check_run(payload: &Value) -> Command {
  let mut cmd = cargo_bin_cmd!("check-run");
  cmd
    .env_clear()
    .env("CHECK_PAYLOAD", payload.to_string())
    .env("CHECK_TEXT_FILE", "/nonexistent/check-run/text");
  cmd
}

fn suite_payload() -> Value {
  envelope("check_suite", check_suite_body("acme/widget", "abc123", "main"))
}

fn stdout_json(output: &std::process::Output) -> anyhow::Result<Value> {
  Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn help_output_lists_configuration() {
  cargo_bin_cmd!("check-run")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Report a CI job's status to GitHub as a check run"))
    .stdout(predicate::str::contains("CHECK_PAYLOAD"))
    .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn dry_run_check_suite_in_progress() -> anyhow::Result<()> {
  let output = check_run(&suite_payload())
    .env("CHECK_NAME", "tests")
    .arg("--dry-run")
    .assert()
    .success()
    .get_output()
    .clone();

  let run = stdout_json(&output)?;
  assert_eq!(run["name"], "tests");
  assert_eq!(run["head_sha"], "abc123");
  assert_eq!(run["head_branch"], "main");
  assert_eq!(run["status"], "in_progress");
  assert!(run.get("conclusion").is_none());
  assert!(run.get("completed_at").is_none());
  assert_eq!(run["output"]["title"], "Running Check");
  Ok(())
}

#[test]
fn dry_run_check_suite_completed() -> anyhow::Result<()> {
  let output = check_run(&suite_payload())
    .env("CHECK_CONCLUSION", "success")
    .env(
      "CHECK_ACTIONS",
      r#"[{"label":"Rerun","description":"Run the job again","identifier":"rerun"}]"#,
    )
    .arg("--dry-run")
    .assert()
    .success()
    .get_output()
    .clone();

  let run = stdout_json(&output)?;
  assert_eq!(run["status"], "completed");
  assert_eq!(run["conclusion"], "success");
  assert!(run["completed_at"].as_str().is_some_and(|at| !at.is_empty()));
  assert_eq!(run["actions"][0]["identifier"], "rerun");
  Ok(())
}

#[test]
fn dry_run_check_run_event() -> anyhow::Result<()> {
  let payload = envelope("check_run", check_run_body("acme/widget", "def456", "feature"));

  let output = check_run(&payload)
    .arg("--dry-run")
    .assert()
    .success()
    .get_output()
    .clone();

  let run = stdout_json(&output)?;
  assert_eq!(run["head_sha"], "def456");
  assert_eq!(run["head_branch"], "feature");
  Ok(())
}

#[test]
fn dry_run_issue_comment_with_overrides() -> anyhow::Result<()> {
  let mut payload = envelope("issue_comment", issue_comment_body("acme/widget"));
  payload["commit"] = json!("0ff1ce");
  payload["branch"] = json!("fix-it");

  let output = check_run(&payload)
    .arg("--dry-run")
    .assert()
    .success()
    .get_output()
    .clone();

  let run = stdout_json(&output)?;
  assert_eq!(run["head_sha"], "0ff1ce");
  assert_eq!(run["head_branch"], "fix-it");
  Ok(())
}

#[test]
fn malformed_actions_exit_code() {
  check_run(&suite_payload())
    .env("CHECK_ACTIONS", "[{")
    .arg("--dry-run")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("could not parse actions"));
}

#[test]
fn malformed_payload_exit_code() {
  cargo_bin_cmd!("check-run")
    .env_clear()
    .env("CHECK_PAYLOAD", "{not json")
    .arg("--dry-run")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("could not parse payload"));
}

#[test]
fn missing_payload_exit_code() {
  cargo_bin_cmd!("check-run")
    .env_clear()
    .arg("--dry-run")
    .assert()
    .code(2);
}

#[test]
fn unsupported_event_type_exit_code() {
  let payload = envelope("push", json!({ "ref": "refs/heads/main" }));

  check_run(&payload)
    .arg("--dry-run")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("unknown payload type push"));
}

#[test]
fn issue_comment_without_overrides_exit_code() {
  let payload = envelope("issue_comment", issue_comment_body("acme/widget"));

  check_run(&payload)
    .arg("--dry-run")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("commit empty"));
}

#[test]
fn invalid_repository_exit_code() {
  let payload = envelope("check_suite", check_suite_body("widget", "abc123", "main"));

  check_run(&payload)
    .arg("--dry-run")
    .assert()
    .code(4)
    .stderr(predicate::str::contains("owner/name"));
}

#[test]
fn missing_repository_exit_code() {
  let payload = envelope(
    "check_suite",
    json!({ "check_suite": { "head_sha": "abc123", "head_branch": "main" } }),
  );

  check_run(&payload)
    .arg("--dry-run")
    .assert()
    .code(4);
}

#[test]
fn missing_event_type_exit_code() {
  let payload = json!({ "token": "test-token", "body": {} });

  check_run(&payload)
    .arg("--dry-run")
    .assert()
    .code(3)
    .stderr(predicate::str::contains("unknown payload type"));
}

#[test]
fn null_token_exit_code() {
  let payload = json!({
    "type": "check_suite",
    "token": null,
    "body": check_suite_body("acme/widget", "abc123", "main")
  });

  check_run(&payload)
    .assert()
    .code(5)
    .stderr(predicate::str::contains("installation token missing"));
}

#[test]
fn missing_token_exit_code() {
  let payload = json!({
    "type": "check_suite",
    "body": check_suite_body("acme/widget", "abc123", "main")
  });

  check_run(&payload)
    .assert()
    .code(5)
    .stderr(predicate::str::contains("installation token missing"));
}

#[tokio::test]
async fn submits_to_enterprise_host() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/v3/repos/acme/widget/check-runs"))
    .and(header("Accept", "application/vnd.github.antiope-preview+json"))
    .and(header("Authorization", "Bearer test-token"))
    .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"id":7,"status":"in_progress"}"#))
    .expect(1)
    .mount(&mock_server)
    .await;

  let mut cmd = check_run(&suite_payload());
  cmd.env("GITHUB_BASE_URL", mock_server.uri());
  let output = tokio::task::spawn_blocking(move || cmd.output()).await??;

  assert_eq!(output.status.code(), Some(0));
  assert_eq!(String::from_utf8(output.stdout)?.trim(), r#"{"id":7,"status":"in_progress"}"#);
  Ok(())
}

#[tokio::test]
async fn rejected_submission_prints_body() -> anyhow::Result<()> {
  let mock_server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/v3/repos/acme/widget/check-runs"))
    .respond_with(ResponseTemplate::new(422).set_body_string(r#"{"message":"Validation Failed"}"#))
    .mount(&mock_server)
    .await;

  let mut cmd = check_run(&suite_payload());
  cmd
    .env("GITHUB_BASE_URL", mock_server.uri())
    .env("CHECK_CONCLUSION", "not-a-conclusion");
  let output = tokio::task::spawn_blocking(move || cmd.output()).await??;

  assert_eq!(output.status.code(), Some(6));
  let stderr = String::from_utf8(output.stderr)?;
  assert!(stderr.contains("HTTP 422"));
  assert!(stderr.contains("Validation Failed"));
  assert!(output.stdout.is_empty());
  Ok(())
}
