//! Integration tests for CLI functionality

use std::path::Path;
use std::process::{Command, Output};

use predicates::prelude::*;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn gtinctl_bin() -> &'static Path {
    assert_cmd::cargo::cargo_bin!("gtinctl")
}

/// Command with a clean credential environment
fn gtinctl() -> Command {
    let mut cmd = Command::new(gtinctl_bin());
    cmd.env_remove("TCO_USERNAME")
        .env_remove("TCO_PASSWORD")
        .env_remove("TCO_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the binary against a mock server in batch mode
async fn run_against(server: &MockServer, dir: &Path, password: &str, args: &[&str]) -> Output {
    let mut cmd = gtinctl();
    cmd.current_dir(dir)
        .env("TCO_API_URL", server.uri())
        .env("TCO_USERNAME", "alice")
        .env("TCO_PASSWORD", password)
        .arg("--batch")
        .args(args);
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mount_token(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": token})))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value, calls: u64) {
    Mock::given(method("POST"))
        .and(path("/generic/gtin"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

async fn catalog_requests(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.url.path() == "/generic/gtin")
        .count()
}

fn read_products(path: &Path) -> Vec<serde_json::Value> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Test that help flag works
#[test]
fn test_help_flag() {
    assert_cmd::Command::new(gtinctl_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TCO Certified"))
        .stdout(predicate::str::contains("--page-range"));
}

/// Test that version flag works
#[test]
fn test_version_flag() {
    assert_cmd::Command::new(gtinctl_bin())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gtinctl"));
}

/// --page and --page-range cannot be combined
#[test]
fn test_page_and_range_conflict() {
    assert_cmd::Command::new(gtinctl_bin())
        .args(["--page", "1", "--page-range", "1-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_inverted_range_fails_before_any_request() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let output = run_against(&server, dir.path(), "pw", &["--page-range", "5-2"]).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid page range"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    assert!(!dir.path().join("products.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_mode_without_password_fails() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = gtinctl();
    cmd.current_dir(dir.path())
        .env("TCO_API_URL", server.uri())
        .args(["--batch", "--username", "alice"]);
    let output = tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TCO_PASSWORD"));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dynamic_two_pages_written_to_default_file() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_token(&server, "abc").await;
    mount_page(
        &server,
        1,
        serde_json::json!({
            "data": {"products": [{"id": 1}, {"id": 2}, {"id": 3}]},
            "meta": {"page": 1, "totalPages": 2}
        }),
        1,
    )
    .await;
    mount_page(
        &server,
        2,
        serde_json::json!({
            "data": {"products": [{"id": 4}, {"id": 5}]},
            "meta": {"page": 2, "totalPages": 2}
        }),
        1,
    )
    .await;

    let output = run_against(&server, dir.path(), "pw", &[]).await;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("products.json"));
    assert!(output.stdout.is_empty());
    assert_eq!(catalog_requests(&server).await, 2);

    let products = read_products(&dir.path().join("products.json"));
    let ids: Vec<i64> = products.iter().filter_map(|p| p["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_single_page_makes_one_request() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_token(&server, "abc").await;
    mount_page(
        &server,
        3,
        serde_json::json!({
            "data": {"products": [{"id": 30}]},
            "meta": {"page": 3, "totalPages": 10}
        }),
        1,
    )
    .await;

    let output = run_against(
        &server,
        dir.path(),
        "pw",
        &["--page", "3", "--product-type", "Displays", "-o", "displays.json"],
    )
    .await;

    assert!(output.status.success());
    assert_eq!(catalog_requests(&server).await, 1);
    assert_eq!(read_products(&dir.path().join("displays.json")).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_auth_failure_exits_with_one() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), "pw", &["--page", "1"]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Authentication failed"));
    assert_eq!(catalog_requests(&server).await, 0);
    assert!(!dir.path().join("products.json").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_page_failure_saves_partial_results_and_exits_zero() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_token(&server, "abc").await;
    mount_page(&server, 1, serde_json::json!({"data": {"products": [{"id": 1}]}}), 1).await;
    mount_page(&server, 2, serde_json::json!({"data": {"products": [{"id": 2}]}}), 1).await;
    Mock::given(method("POST"))
        .and(path("/generic/gtin"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, 4, serde_json::json!({"data": {"products": [{"id": 4}]}}), 0).await;
    mount_page(&server, 5, serde_json::json!({"data": {"products": [{"id": 5}]}}), 0).await;

    let output = run_against(&server, dir.path(), "pw", &["--page-range", "1-5"]).await;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("page 3"));
    assert_eq!(catalog_requests(&server).await, 3);

    let ids: Vec<i64> = read_products(&dir.path().join("products.json"))
        .iter()
        .filter_map(|p| p["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_password_and_token_used_verbatim() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_json(serde_json::json!({"username": "alice", "password": ""})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/generic/gtin"))
        .and(header("X-Auth-Token", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"products": [{"id": 1}]},
            "meta": {"page": 1, "totalPages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), "", &[]).await;

    assert!(output.status.success());
    assert_eq!(read_products(&dir.path().join("products.json")).len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_password_never_logged_or_saved() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    mount_token(&server, "abc").await;
    mount_page(
        &server,
        1,
        serde_json::json!({
            "data": {"products": [{"id": 1}]},
            "meta": {"page": 1, "totalPages": 1}
        }),
        1,
    )
    .await;

    let output = run_against(&server, dir.path(), "hunter2-secret", &["-l", "debug"]).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stdout.contains("hunter2-secret"));
    assert!(!stderr.contains("hunter2-secret"));
    let saved = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    assert!(!saved.contains("hunter2-secret"));
}
