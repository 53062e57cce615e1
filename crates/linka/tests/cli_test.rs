//! Integration tests for the `linka` binary.
//!
//! Each test runs the real binary in an empty temp directory with a
//! scrubbed environment, against wiremock stand-ins for the feed and the
//! Twitter API.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `linka` binary with env isolation.
///
/// Runs inside `dir` so a stray `.env` in the repository is never picked up.
fn linka_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("linka");
    cmd.current_dir(dir.path())
        .env_remove("API_URL")
        .env_remove("CONSUMER_KEY")
        .env_remove("CONSUMER_SECRET")
        .env_remove("ACCESS_TOKEN")
        .env_remove("ACCESS_TOKEN_SECRET")
        .env_remove("LINKA_TWITTER_API_URL")
        .env_remove("LINKA_TIMEOUT")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1");
    cmd
}

/// Point the binary at `server` for both the feed and the Twitter API.
fn against(cmd: &mut assert_cmd::Command, server: &MockServer) {
    cmd.env("API_URL", format!("{}/feed", server.uri()))
        .env("LINKA_TWITTER_API_URL", format!("{}/1.1/", server.uri()))
        .env("LINKA_TIMEOUT", "5")
        .env("CONSUMER_KEY", "ck")
        .env("CONSUMER_SECRET", "cs")
        .env("ACCESS_TOKEN", "at")
        .env("ACCESS_TOKEN_SECRET", "ats");
}

/// Run the command off the async runtime so the mock server keeps serving.
async fn output_of(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mount_feed(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "sensor": "A", "source": "s1", "description": "", "quality": { "index": 42 } }
        ])))
        .mount(server)
        .await;
}

async fn mount_verify_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/1.1/account/verify_credentials.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id_str": "42", "screen_name": "airelibrepy" })),
        )
        .mount(server)
        .await;
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_api_url_is_config_error() {
    let dir = TempDir::new().unwrap();
    linka_cmd(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API_URL"));
}

#[tokio::test]
async fn test_dotenv_file_is_loaded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/from-dotenv"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        format!("API_URL={}/from-dotenv\n", server.uri()),
    )
    .unwrap();

    let output = output_of(linka_cmd(&dir)).await;

    // The feed answered 500, which proves API_URL came from the file.
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}

// ── Fatal pipeline failures ─────────────────────────────────────────

#[tokio::test]
async fn test_feed_error_exits_with_connection_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = linka_cmd(&dir);
    against(&mut cmd, &server);
    let output = output_of(cmd).await;

    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("sensor feed"));
}

#[tokio::test]
async fn test_auth_failure_exits_with_auth_code() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    Mock::given(method("GET"))
        .and(path("/1.1/account/verify_credentials.json"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = linka_cmd(&dir);
    against(&mut cmd, &server);
    let output = output_of(cmd).await;

    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Authentication failed"));
}

// ── Posting ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_successful_run_posts_once() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    mount_verify_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/1.1/statuses/update.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id_str": "9001" })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = linka_cmd(&dir);
    against(&mut cmd, &server);
    let output = output_of(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("status posted"));
}

#[tokio::test]
async fn test_post_failure_is_logged_but_not_fatal() {
    let server = MockServer::start().await;
    mount_feed(&server).await;
    mount_verify_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/1.1/statuses/update.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{ "code": 187, "message": "Status is a duplicate." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = linka_cmd(&dir);
    against(&mut cmd, &server);
    let output = output_of(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let text = combined_output(&output);
    assert!(text.contains("status update failed"), "{text}");
    assert!(text.contains("Status is a duplicate."), "{text}");
    assert!(text.contains("post_failed"), "{text}");
}
