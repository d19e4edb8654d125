//! Full-pipeline integration tests over the in-memory adapters.

use std::path::Path;

use stagehand_adapters::{BuiltinTemplates, LocalFilesystem, MemoryConsole, MemoryFilesystem};
use stagehand_core::{
    application::CreateService,
    domain::{CreateOptions, EnvironmentDocument},
    prelude::Filesystem,
};

fn service_over(
    console: &MemoryConsole,
    filesystem: &MemoryFilesystem,
) -> CreateService {
    CreateService::new(
        Box::new(console.clone()),
        Box::new(filesystem.clone()),
        Box::new(BuiltinTemplates::new()),
    )
}

#[test]
fn full_scaffold_workflow() {
    let console = MemoryConsole::new(false);
    let filesystem = MemoryFilesystem::new();
    let service = service_over(&console, &filesystem);

    let options = CreateOptions::new("new-service", "dev", "aws_useast1", "/projects");
    let report = service.run(&options).unwrap();

    assert_eq!(report.root, Path::new("/projects/new-service"));
    assert!(filesystem.exists(Path::new("/projects/new-service")));

    // Handler stub exists and is the fixed content.
    let handler = filesystem
        .read_file(Path::new("/projects/new-service/handler.js"))
        .unwrap();
    assert!(handler.contains("module.exports.hello"));

    // Manifest carries the service name.
    let manifest: serde_yaml::Value = serde_yaml::from_str(
        &filesystem
            .read_file(Path::new("/projects/new-service/stagehand.yaml"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(manifest["service"], serde_yaml::Value::from("new-service"));

    // Package descriptor carries the name.
    let package: serde_json::Value = serde_json::from_str(
        &filesystem
            .read_file(Path::new("/projects/new-service/package.json"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(package["name"], "new-service");

    // Environment document has the stage/region branch as an empty object.
    let env: EnvironmentDocument = serde_yaml::from_str(
        &filesystem
            .read_file(Path::new("/projects/new-service/stagehand.env.yaml"))
            .unwrap(),
    )
    .unwrap();
    let vars = env.vars("dev", "aws_useast1").expect("branch missing");
    assert!(vars.is_empty());
}

#[test]
fn scaffolding_twice_overwrites_with_equal_content() {
    let console = MemoryConsole::new(false);
    let filesystem = MemoryFilesystem::new();
    let service = service_over(&console, &filesystem);

    let options = CreateOptions::new("new-service", "dev", "aws_useast1", "/projects");
    service.run(&options).unwrap();

    let snapshot: Vec<(std::path::PathBuf, String)> = filesystem
        .list_files()
        .into_iter()
        .map(|p| {
            let content = filesystem.read_file(&p).unwrap();
            (p, content)
        })
        .collect();
    assert_eq!(snapshot.len(), 4);

    service.run(&options).unwrap();

    assert_eq!(filesystem.list_files().len(), 4, "no duplicate artifacts");
    for (path, content) in snapshot {
        assert_eq!(
            filesystem.read_file(&path).unwrap(),
            content,
            "content changed for {}",
            path.display()
        );
    }
}

#[test]
fn invalid_name_writes_nothing() {
    let console = MemoryConsole::new(false);
    let filesystem = MemoryFilesystem::new();
    let service = service_over(&console, &filesystem);

    let options = CreateOptions::new("invalid_service_name", "dev", "aws_useast1", "/projects");
    assert!(service.run(&options).is_err());

    assert!(filesystem.list_files().is_empty());
    assert!(!filesystem.exists(Path::new("/projects/invalid_service_name")));
}

#[test]
fn interactive_session_greets_once_and_finishes_with_five_lines() {
    let console = MemoryConsole::new(true);
    let filesystem = MemoryFilesystem::new();
    let service = service_over(&console, &filesystem);

    let options = CreateOptions::new("new-service", "dev", "aws_useast1", "/projects");
    service.run(&options).unwrap();

    assert_eq!(console.greeting_count(), 1);
    assert_eq!(console.lines().len(), 5);
    assert!(console.lines()[0].contains("new-service"));
}

#[test]
fn non_interactive_session_never_greets() {
    let console = MemoryConsole::new(false);
    let filesystem = MemoryFilesystem::new();
    let service = service_over(&console, &filesystem);

    let options = CreateOptions::new("new-service", "dev", "aws_useast1", "/projects");
    service.run(&options).unwrap();

    assert_eq!(console.greeting_count(), 0);
}

#[test]
fn pipeline_against_the_real_filesystem() {
    let temp = tempfile::TempDir::new().unwrap();
    let console = MemoryConsole::new(false);
    let service = CreateService::new(
        Box::new(console),
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinTemplates::new()),
    );

    let options = CreateOptions::new("new-service", "dev", "aws_useast1", temp.path());
    let report = service.run(&options).unwrap();

    for file in &report.files {
        assert!(file.exists(), "missing artifact: {}", file.display());
        let metadata = std::fs::metadata(file).unwrap();
        assert!(metadata.len() > 0, "empty artifact: {}", file.display());
    }
}
