//! Webhook payloads trimmed down to the fields the reporter reads, plus the
//! few surrounding fields GitHub always sends.

use serde_json::{Value, json};

/// Installation token placed in every [`envelope`]
pub const TEST_TOKEN: &str = "test-token";

fn repository(full_name: &str) -> Value {
  let name = full_name.rsplit('/').next().unwrap_or(full_name);
  json!({
    "id": 1296269,
    "name": name,
    "full_name": full_name,
    "private": false
  })
}

fn check_suite(head_sha: &str, head_branch: &str) -> Value {
  json!({
    "id": 118578147,
    "head_branch": head_branch,
    "head_sha": head_sha,
    "status": "queued",
    "conclusion": null
  })
}

/// Body of a `check_suite` delivery
pub fn check_suite_body(full_name: &str, head_sha: &str, head_branch: &str) -> Value {
  json!({
    "action": "requested",
    "check_suite": check_suite(head_sha, head_branch),
    "repository": repository(full_name)
  })
}

/// Body of a `check_run` delivery; the commit lives on the nested suite
pub fn check_run_body(full_name: &str, head_sha: &str, head_branch: &str) -> Value {
  json!({
    "action": "rerequested",
    "check_run": {
      "id": 128620228,
      "name": "tests",
      "head_sha": head_sha,
      "status": "completed",
      "check_suite": check_suite(head_sha, head_branch)
    },
    "repository": repository(full_name)
  })
}

/// Body of an `issue_comment` delivery, which has no commit or branch
pub fn issue_comment_body(full_name: &str) -> Value {
  json!({
    "action": "created",
    "issue": { "number": 7, "title": "Flaky test" },
    "comment": { "id": 99, "body": "/rerun" },
    "repository": repository(full_name)
  })
}

/// Wrap `body` in the gateway envelope read from `CHECK_PAYLOAD`
pub fn envelope(event_type: &str, body: Value) -> Value {
  json!({
    "type": event_type,
    "token": TEST_TOKEN,
    "body": body
  })
}
