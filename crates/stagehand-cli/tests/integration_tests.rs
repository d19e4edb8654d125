//! Integration tests for the `stagehand` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `stagehand` invocation isolated from the host environment.
fn stagehand() -> Command {
    let mut cmd = Command::cargo_bin("stagehand").unwrap();
    cmd.env_remove("STAGEHAND_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn help_lists_the_create_command() {
    stagehand()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    stagehand()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn create_writes_all_artifacts() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args([
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ])
        .assert()
        .success();

    let project = temp.path().join("new-service");
    assert!(project.join("handler.js").exists());
    assert!(project.join("stagehand.yaml").exists());
    assert!(project.join("package.json").exists());
    assert!(project.join("stagehand.env.yaml").exists());

    // The rendered documents carry the service identity.
    let manifest: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(project.join("stagehand.yaml")).unwrap())
            .unwrap();
    assert_eq!(manifest["service"], serde_yaml::Value::from("new-service"));

    let package: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(package["name"], "new-service");

    let env: serde_yaml::Value =
        serde_yaml::from_str(&std::fs::read_to_string(project.join("stagehand.env.yaml")).unwrap())
            .unwrap();
    assert!(env["stages"]["dev"]["regions"]["aws_useast1"].is_mapping());
}

#[test]
fn create_twice_succeeds_and_overwrites() {
    let temp = TempDir::new().unwrap();
    let args = [
        "create",
        "new-service",
        "--stage",
        "dev",
        "--region",
        "aws_useast1",
    ];

    stagehand()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
    let first =
        std::fs::read_to_string(temp.path().join("new-service/stagehand.yaml")).unwrap();

    stagehand()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
    let second =
        std::fs::read_to_string(temp.path().join("new-service/stagehand.yaml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_name_exits_2_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args([
            "create",
            "invalid_service_name",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid service name"));

    assert!(!temp.path().join("invalid_service_name").exists());
}

#[test]
fn missing_region_exits_2_in_non_interactive_session() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args(["create", "new-service", "--stage", "dev"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("region"));

    assert!(!temp.path().join("new-service").exists());
}

#[test]
fn config_file_supplies_stage_and_region_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[defaults]\nstage = \"prod\"\nregion = \"aws_euwest1\"\n",
    )
    .unwrap();

    stagehand()
        .current_dir(temp.path())
        .args(["create", "new-service", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    let env: serde_yaml::Value = serde_yaml::from_str(
        &std::fs::read_to_string(temp.path().join("new-service/stagehand.env.yaml")).unwrap(),
    )
    .unwrap();
    assert!(env["stages"]["prod"]["regions"]["aws_euwest1"].is_mapping());
}

#[test]
fn explicit_missing_config_exits_4() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args([
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
            "--config",
            "/definitely/not/here.toml",
        ])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn dry_run_describes_without_writing() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args([
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("new-service").exists());
}

#[test]
fn quiet_create_prints_nothing_to_stdout() {
    let temp = TempDir::new().unwrap();

    stagehand()
        .current_dir(temp.path())
        .args([
            "-q",
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("new-service/handler.js").exists());
}

#[test]
fn custom_template_directory_is_used() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    std::fs::write(
        templates.join("stagehand.yaml"),
        "service: ''\nprovider:\n  name: custom\n",
    )
    .unwrap();
    std::fs::write(templates.join("package.json"), r#"{"name": "", "private": true}"#).unwrap();

    stagehand()
        .current_dir(temp.path())
        .env("STAGEHAND_TEMPLATES_DIR", &templates)
        .args([
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ])
        .assert()
        .success();

    let manifest: serde_yaml::Value = serde_yaml::from_str(
        &std::fs::read_to_string(temp.path().join("new-service/stagehand.yaml")).unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["provider"]["name"], serde_yaml::Value::from("custom"));
}

#[test]
fn broken_template_directory_exits_3() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    std::fs::create_dir(&templates).unwrap();
    // Manifest present, package descriptor missing.
    std::fs::write(templates.join("stagehand.yaml"), "service: ''\n").unwrap();

    stagehand()
        .current_dir(temp.path())
        .env("STAGEHAND_TEMPLATES_DIR", &templates)
        .args([
            "create",
            "new-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn completions_emit_the_binary_name() {
    stagehand()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stagehand"));
}
