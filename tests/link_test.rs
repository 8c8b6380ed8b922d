use std::time::Duration;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEYS: &str = "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5\nssh-rsa AAAAB3NzaC1yc2EAAAADAQAB\n";

/// Run keylink against a temp params dir and the given host.
fn keylink(dir: &assert_fs::TempDir, host: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("keylink");
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("KEYLINK_PARAMS_DIR")
        .env_remove("RUST_LOG")
        .args(["--params-dir", "params", "--host", host]);
    cmd
}

async fn serve_keys(server: &MockServer, username: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{username}.keys")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn read_param(dir: &assert_fs::TempDir, key: &str) -> Option<String> {
    std::fs::read_to_string(dir.path().join("params").join(key)).ok()
}

fn seed_linked(dir: &assert_fs::TempDir, username: &str) {
    dir.child("params/GithubUsername").write_str(username).unwrap();
    dir.child("params/GithubSshKeys").write_str(KEYS).unwrap();
}

// ─── status ──────────────────────────────────────────────────────

#[test]
fn status_unlinked_by_default() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No account linked"));
}

#[test]
fn status_lists_keys_of_linked_account() {
    let dir = assert_fs::TempDir::new().unwrap();
    seed_linked(&dir, "alice");

    keylink(&dir, "http://127.0.0.1:1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked account: alice"))
        .stdout(predicate::str::contains("Keys (2)"))
        .stdout(predicate::str::contains("ssh-ed25519 SHA256:"));
}

#[test]
fn status_json_reports_state() {
    let dir = assert_fs::TempDir::new().unwrap();
    seed_linked(&dir, "alice");

    let output = keylink(&dir, "http://127.0.0.1:1")
        .args(["status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["linked"], true);
    assert_eq!(report["username"], "alice");
    assert_eq!(report["keys"].as_array().unwrap().len(), 2);
}

#[test]
fn half_written_pair_reads_as_unlinked() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("params/GithubUsername").write_str("alice").unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No account linked"));
}

// ─── link ────────────────────────────────────────────────────────

#[tokio::test]
async fn link_persists_username_and_keys() {
    let server = MockServer::start().await;
    serve_keys(&server, "alice", KEYS).await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .args(["link", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked alice (2 keys)"));

    assert_eq!(read_param(&dir, "GithubUsername").as_deref(), Some("alice"));
    assert_eq!(read_param(&dir, "GithubSshKeys").as_deref(), Some(KEYS));
}

#[tokio::test]
async fn link_reads_username_from_prompt() {
    let server = MockServer::start().await;
    serve_keys(&server, "alice", KEYS).await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .arg("link")
        .write_stdin("alice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your GitHub username"))
        .stdout(predicate::str::contains("Never enter a GitHub username"));

    assert_eq!(read_param(&dir, "GithubUsername").as_deref(), Some("alice"));
}

#[tokio::test]
async fn empty_prompt_answer_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(KEYS))
        .expect(0)
        .mount(&server)
        .await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .arg("link")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing linked"));

    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

#[tokio::test]
async fn link_unknown_user_reports_not_found() {
    let server = MockServer::start().await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .args(["link", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Username 'ghost' doesn't exist on GitHub",
        ));

    assert!(read_param(&dir, "GithubUsername").is_none());
    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

#[tokio::test]
async fn link_user_without_keys_reports_no_keys() {
    let server = MockServer::start().await;
    serve_keys(&server, "bare", "").await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .args(["link", "bare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username 'bare' has no keys on GitHub"));

    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

#[tokio::test]
async fn link_server_error_reports_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .args(["link", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed"));
}

#[tokio::test]
async fn slow_host_reports_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(KEYS)
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&server)
        .await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .args(["--timeout", "1", "link", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request timed out"));

    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

#[test]
fn link_rejects_path_like_username() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .args(["link", "../etc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid username"));
}

#[test]
fn link_when_already_linked_fails() {
    let dir = assert_fs::TempDir::new().unwrap();
    seed_linked(&dir, "alice");

    keylink(&dir, "http://127.0.0.1:1")
        .args(["link", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'alice' is already linked"));

    assert_eq!(read_param(&dir, "GithubUsername").as_deref(), Some("alice"));
}

// ─── unlink / authorized-keys ────────────────────────────────────

#[test]
fn unlink_removes_both_params() {
    let dir = assert_fs::TempDir::new().unwrap();
    seed_linked(&dir, "alice");

    keylink(&dir, "http://127.0.0.1:1")
        .arg("unlink")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unlinked alice"));

    assert!(read_param(&dir, "GithubUsername").is_none());
    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

#[test]
fn unlink_without_account_warns() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .arg("unlink")
        .assert()
        .success()
        .stdout(predicate::str::contains("No account linked"));
}

#[test]
fn authorized_keys_prints_blob_verbatim() {
    let dir = assert_fs::TempDir::new().unwrap();
    seed_linked(&dir, "alice");

    keylink(&dir, "http://127.0.0.1:1")
        .arg("authorized-keys")
        .assert()
        .success()
        .stdout(KEYS);
}

#[test]
fn authorized_keys_empty_when_unlinked() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .arg("authorized-keys")
        .assert()
        .success()
        .stdout("");
}

// ─── panel ───────────────────────────────────────────────────────

#[tokio::test]
async fn panel_links_then_unlinks() {
    let server = MockServer::start().await;
    serve_keys(&server, "alice", KEYS).await;
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, &server.uri())
        .arg("panel")
        .write_stdin("\nalice\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[REMOVE]"));
    assert_eq!(read_param(&dir, "GithubUsername").as_deref(), Some("alice"));

    keylink(&dir, &server.uri())
        .arg("panel")
        .write_stdin("\nq\n")
        .assert()
        .success();
    assert!(read_param(&dir, "GithubSshKeys").is_none());
}

// ─── config ──────────────────────────────────────────────────────

#[test]
fn host_flag_without_scheme_fails_early() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "github.com")
        .args(["link", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("host must be an http(s) URL"));

    assert!(read_param(&dir, "GithubUsername").is_none());
}

#[test]
fn missing_explicit_config_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    keylink(&dir, "http://127.0.0.1:1")
        .args(["--config", "nope.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn config_file_supplies_params_dir() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("other/GithubUsername").write_str("carol").unwrap();
    dir.child("other/GithubSshKeys").write_str(KEYS).unwrap();
    dir.child("keylink.toml")
        .write_str("[params]\ndir = \"other\"\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("keylink");
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("KEYLINK_PARAMS_DIR")
        .args(["--config", "keylink.toml", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked account: carol"));
}
