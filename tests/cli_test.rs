//! Integration tests for the todo binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todo::task::fnv1a_32;

fn write_config(temp: &TempDir, url: &str) -> PathBuf {
    let path = temp.path().join(".todo.cfg");
    fs::write(&path, format!("# test server\nurl: {}\ntimeout: 5\n", url)).unwrap();
    path
}

fn todo(config: &PathBuf) -> Command {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.env("TODO_CONFIG", config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("remote task-tracking service"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn unknown_subcommand_lists_valid_commands() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("todo"));
    cmd.arg("frobnicate");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Valid commands"))
        .stderr(predicate::str::contains("init"))
        .stderr(predicate::str::contains("done"));
    Ok(())
}

#[test]
fn add_without_name_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = write_config(&temp, "http://127.0.0.1:1");
    todo(&config).arg("add").assert().code(2);
    Ok(())
}

#[test]
fn missing_config_points_to_init() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join(".todo.cfg");

    for args in [vec!["list"], vec!["add", "x"], vec!["del", "1"], vec!["system"]] {
        todo(&config)
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("todo init"));
    }
    Ok(())
}

#[test]
fn init_twice_fails_and_keeps_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join(".todo.cfg");

    todo(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    let original = fs::read_to_string(&config)?;

    todo(&config)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config)?, original);
    Ok(())
}

#[test]
fn untouched_template_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join(".todo.cfg");

    todo(&config).arg("init").assert().success();
    todo(&config)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("url is not set"));
    Ok(())
}

#[test]
fn list_renders_todo_line() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":"1","name":"buy milk","complete":false}]"#);
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^TODO: buy milk\s+1$")?)
        .stdout(predicate::str::contains("Todo Server [127.0.0.1]"));
    Ok(())
}

#[test]
fn list_decode_failure_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/tasks/");
        then.status(200).body("not json");
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Could not decode"));
    Ok(())
}

#[test]
fn add_reports_rejection() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/create");
        then.status(500).body("database down");
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .args(["add", "buy", "milk"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("rejected"))
        .stderr(predicate::str::contains("database down"));
    Ok(())
}

#[test]
fn add_joins_words_into_one_name() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/create")
            .json_body(serde_json::json!({
                "id": fnv1a_32("buy milk").to_string(),
                "name": "buy milk",
                "complete": false
            }));
        then.status(201);
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .args(["add", "buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"buy milk\""));
    mock.assert();
    Ok(())
}

#[test]
fn del_issues_delete_and_echoes_body() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/delete/42");
        then.status(200).body("task 42 deleted\n\n");
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .args(["del", "42"])
        .assert()
        .success()
        .stdout("task 42 deleted\n\n");
    mock.assert();
    Ok(())
}

#[test]
fn del_keeps_slashes_inside_the_id() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let tasks = server.mock(|when, then| {
        when.method(DELETE).path("/api/tasks/");
        then.status(200).body("wiped");
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/delete/..%2Ftasks%2F");
        then.status(404).body("no such task");
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .args(["del", "../tasks/"])
        .assert()
        .success()
        .stdout("no such task")
        .stderr(predicate::str::contains("HTTP 404"));
    tasks.assert_hits(0);
    delete.assert();
    Ok(())
}

#[test]
fn done_rejects_dot_dot_id() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.any_request();
        then.status(200);
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config).args(["done", ".."]).assert().code(2);
    any.assert_hits(0);
    Ok(())
}

#[test]
fn done_issues_patch_and_echoes_body() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/update/7")
            .json_body(serde_json::json!({"complete": true}));
        then.status(200).body("task 7 updated");
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .args(["done", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task 7 updated"));
    mock.assert();
    Ok(())
}

#[test]
fn system_shows_hostname() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/system");
        then.status(200).body(r#"{"hostname":"tasks-01"}"#);
    });
    let temp = TempDir::new()?;
    let config = write_config(&temp, &server.base_url());

    todo(&config)
        .arg("system")
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo Server [tasks-01]"));
    Ok(())
}

#[test]
fn unreachable_server_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = write_config(&temp, "http://127.0.0.1:1");

    todo(&config)
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed"));
    Ok(())
}

#[test]
fn completions_run_without_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("missing.cfg");

    todo(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("todo"));
    Ok(())
}
