//! Integration tests for the mcp-forge binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn mcp_forge() -> Command {
    let mut cmd = Command::cargo_bin("mcp-forge").unwrap();
    cmd.env_remove("MCP_FORGE_OUTPUT_DIR")
        .env_remove("MCP_FORGE_TEMPLATE_DIR")
        .env("RUST_LOG", "info");
    cmd
}

#[test]
fn test_preview_prints_entry_point_only() {
    mcp_forge()
        .arg("preview")
        .arg(fixture("weather-server.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/usr/bin/env node"))
        .stdout(predicate::str::contains("\"get_forecast\""))
        .stdout(predicate::str::contains("Rendered preview").not())
        .stderr(predicate::str::contains("Rendered preview"));
}

#[test]
fn test_preview_reads_yaml() {
    mcp_forge()
        .arg("preview")
        .arg(fixture("notes-server.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("StreamableHTTPServerTransport"))
        .stdout(predicate::str::contains("notes.push(args.text);"));
}

#[test]
fn test_generate_into_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    mcp_forge()
        .arg("generate")
        .arg(fixture("weather-server.json"))
        .arg("--output-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("weather-server"));

    for file in ["package.json", "tsconfig.json", "index.ts", "README.md"] {
        assert!(temp_dir.path().join("weather-server").join(file).is_file());
    }
}

#[test]
fn test_generate_uses_env_output_dir() {
    let temp_dir = TempDir::new().unwrap();

    mcp_forge()
        .env("MCP_FORGE_OUTPUT_DIR", temp_dir.path())
        .arg("generate")
        .arg(fixture("notes-server.yaml"))
        .assert()
        .success();

    assert!(temp_dir.path().join("notes-server/index.ts").is_file());
}

#[test]
fn test_settings_file_sets_storage_dir() {
    let temp_dir = TempDir::new().unwrap();
    let storage = temp_dir.path().join("from-settings");
    let settings = temp_dir.path().join("mcp-forge.toml");
    std::fs::write(
        &settings,
        format!("storage_dir = {:?}\n", storage.to_string_lossy()),
    )
    .unwrap();

    mcp_forge()
        .arg("--settings")
        .arg(&settings)
        .arg("generate")
        .arg(fixture("weather-server.json"))
        .assert()
        .success();

    assert!(storage.join("weather-server/README.md").is_file());
}

#[test]
fn test_package_writes_archive() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("bundle.zip");

    mcp_forge()
        .arg("package")
        .arg(fixture("weather-server.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("bundle.zip"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_package_defaults_to_server_name() {
    let temp_dir = TempDir::new().unwrap();

    mcp_forge()
        .current_dir(temp_dir.path())
        .arg("package")
        .arg(fixture("weather-server.json"))
        .assert()
        .success();

    assert!(temp_dir.path().join("weather-server.zip").is_file());
}

#[test]
fn test_invalid_server_name_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.json");
    std::fs::write(&config, r#"{"serverName": "../../etc"}"#).unwrap();

    mcp_forge()
        .arg("generate")
        .arg(&config)
        .arg("--output-dir")
        .arg(temp_dir.path().join("out"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid server name"));

    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_templates_export_round_trips_through_template_dir() {
    let temp_dir = TempDir::new().unwrap();
    let templates = temp_dir.path().join("templates");

    mcp_forge()
        .arg("templates")
        .arg("export")
        .arg(&templates)
        .assert()
        .success()
        .stdout(predicate::str::contains("index.ts.tera"));

    let embedded = mcp_forge()
        .arg("preview")
        .arg(fixture("weather-server.json"))
        .output()
        .unwrap();

    std::fs::write(
        templates.join("index.ts.tera"),
        "// custom entry for {{ config.serverName }}\n",
    )
    .unwrap();

    mcp_forge()
        .arg("--template-dir")
        .arg(&templates)
        .arg("preview")
        .arg(fixture("weather-server.json"))
        .assert()
        .success()
        .stdout("// custom entry for weather-server\n");

    assert!(String::from_utf8(embedded.stdout).unwrap().contains("createServer"));
}
