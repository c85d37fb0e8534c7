//! Integration tests for the `unifi-inventory` binary.
//!
//! Argument parsing and startup failures run without a controller; the
//! rest point the binary at a wiremock controller over plain HTTP via
//! `UNIFI_CONTROLLER`.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// `aHVudGVyMg==` is base64 for `hunter2`.
const ENCODED_PASSWORD: &str = "aHVudGVyMg==";

/// Build a [`Command`] for the binary with a clean environment.
fn inventory_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unifi-inventory");
    cmd.env_clear();
    cmd
}

/// Command wired to a mock controller with valid credentials.
fn inventory_cmd_for(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = inventory_cmd();
    cmd.env("UNIFI_CONTROLLER", server.uri())
        .env("UNIFI_USERNAME", "admin")
        .env("UNIFI_PASSWORD", ENCODED_PASSWORD)
        .env("UNIFI_TIMEOUT", "5");
    cmd
}

/// Run a command off the async runtime so wiremock keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

async fn mount_login(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "admin", "password": "hunter2" })))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn mount_data(server: &MockServer, suffix: &str, data: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/s/default/{suffix}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": data })),
        )
        .mount(server)
        .await;
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    inventory_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--list").and(predicate::str::contains("UniFi")));
}

#[test]
fn test_version_flag() {
    inventory_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unifi-inventory"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    inventory_cmd()
        .arg("--host")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

// ── Startup failures ────────────────────────────────────────────────

#[test]
fn test_missing_credentials() {
    inventory_cmd()
        .arg("--list")
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("UNIFI_USERNAME"));
}

#[test]
fn test_missing_password_only() {
    inventory_cmd()
        .env("UNIFI_USERNAME", "admin")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_platform() {
    inventory_cmd()
        .env("UNIFI_USERNAME", "admin")
        .env("UNIFI_PASSWORD", ENCODED_PASSWORD)
        .env("UNIFI_PLATFORM", "cloud")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("platform"));
}

// ── Against a mock controller ───────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_login_rejected_prints_nothing() {
    let server = MockServer::start().await;
    mount_login(&server, 401).await;

    let output = run(inventory_cmd_for(&server)).await;

    assert!(!output.status.success(), "expected failure");
    assert!(output.stdout.is_empty(), "stdout should be empty");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Authentication failed"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_undecodable_password_prints_nothing() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;

    let mut cmd = inventory_cmd_for(&server);
    cmd.env("UNIFI_PASSWORD", "not base64!");
    let output = run(cmd).await;

    assert!(!output.status.success(), "expected failure");
    assert!(output.stdout.is_empty(), "stdout should be empty");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_inventory() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    mount_data(
        &server,
        "stat/device",
        json!([
            { "name": "sw1", "mac": "aa:bb", "type": "usw", "ip": "10.0.0.1" },
            { "name": "ap1", "mac": "aa:cc", "type": "uap", "model": "U6LR", "version": "6.6.55" },
            { "name": "gw1", "mac": "aa:dd", "type": "ugw", "state": 0 }
        ]),
    )
    .await;
    mount_data(
        &server,
        "stat/sta",
        json!([
            { "hostname": "nas", "mac": "cc:01", "is_wired": true, "ip": "10.0.0.20" },
            { "hostname": null, "mac": "cc:dd", "is_wired": false }
        ]),
    )
    .await;

    let mut cmd = inventory_cmd_for(&server);
    cmd.arg("--list");
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let inventory = stdout_json(&output);

    assert_eq!(inventory["all"]["children"], json!(["unifi_devices", "unifi_clients"]));
    assert_eq!(inventory["switches"]["hosts"], json!(["sw1"]));
    assert_eq!(inventory["aps"]["hosts"], json!(["ap1"]));
    assert_eq!(inventory["gateways"]["hosts"], json!(["gw1"]));
    assert_eq!(inventory["wired_clients"]["hosts"], json!(["nas"]));
    assert_eq!(inventory["wireless_clients"]["hosts"], json!(["cc:dd"]));
    assert_eq!(inventory["_meta"]["hostvars"]["sw1"]["device_type"], "usw");
    assert_eq!(inventory["_meta"]["hostvars"]["sw1"]["adoption_state"], 1);
    assert_eq!(inventory["_meta"]["hostvars"]["gw1"]["adoption_state"], 0);
    assert_eq!(inventory["_meta"]["hostvars"]["cc:dd"]["unifi_client"], true);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_flag_does_not_change_output() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    mount_data(&server, "stat/device", json!([{ "name": "sw1", "type": "usw" }])).await;
    mount_data(&server, "stat/sta", json!([])).await;

    let without = run(inventory_cmd_for(&server)).await;
    let mut cmd = inventory_cmd_for(&server);
    cmd.arg("--list");
    let with = run(cmd).await;

    assert!(without.status.success() && with.status.success());
    assert_eq!(stdout_json(&without), stdout_json(&with));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_device_fetch_still_emits_inventory() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/device"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_data(
        &server,
        "stat/sta",
        json!([{ "hostname": "laptop", "mac": "cc:02", "is_wired": false }]),
    )
    .await;

    let output = run(inventory_cmd_for(&server)).await;

    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let inventory = stdout_json(&output);
    assert_eq!(inventory["switches"]["hosts"], json!([]));
    assert_eq!(inventory["aps"]["hosts"], json!([]));
    assert_eq!(inventory["gateways"]["hosts"], json!([]));
    assert_eq!(inventory["wireless_clients"]["hosts"], json!(["laptop"]));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to fetch devices"), "stderr:\n{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_controller_emits_skeleton() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    mount_data(&server, "stat/device", json!([])).await;
    mount_data(&server, "stat/sta", json!([])).await;

    let output = run(inventory_cmd_for(&server)).await;

    assert!(output.status.success());
    let inventory = stdout_json(&output);
    assert_eq!(inventory["_meta"], json!({ "hostvars": {} }));
    for group in ["switches", "aps", "gateways", "wired_clients", "wireless_clients"] {
        assert_eq!(inventory[group], json!({ "hosts": [] }), "group {group}");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_leading_zero_site_reaches_controller_verbatim() {
    let server = MockServer::start().await;
    mount_login(&server, 200).await;
    Mock::given(method("GET"))
        .and(path("/api/s/0001/stat/device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "meta": { "rc": "ok" }, "data": [{ "name": "sw1", "type": "usw", "state": "1" }] }),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/s/0001/stat/sta"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "meta": { "rc": "ok" }, "data": [] })),
        )
        .mount(&server)
        .await;

    let mut cmd = inventory_cmd_for(&server);
    cmd.env("UNIFI_SITE", "0001");
    let output = run(cmd).await;

    assert!(output.status.success(), "stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    let inventory = stdout_json(&output);
    assert_eq!(inventory["switches"]["hosts"], json!(["sw1"]));
    assert_eq!(inventory["_meta"]["hostvars"]["sw1"]["adoption_state"], 1);
}
