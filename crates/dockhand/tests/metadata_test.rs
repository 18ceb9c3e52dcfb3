#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

const METADATA_CONFIG: &str = r#"
name: webapp
image:
  name: webapp
  tags: ["1.2.0"]
dependencies:
  - name: postgres
    version: "16.2"
  - name: seed-data
    kind: file
"#;

/// metadataが "docker" コンポーネントのJSONを出力することを確認
#[test]
fn test_metadata_prints_component_json() {
    let project = TestProject::new();
    project.write_config(METADATA_CONFIG);

    let mut cmd = Command::cargo_bin("dock").unwrap();
    let output = cmd
        .current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .env_remove("DOCKHAND_ENVIRONMENT")
        .arg("metadata")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let document: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(document["name"], "docker");
    assert_eq!(document["usages"].as_array().unwrap().len(), 1);

    let usage = &document["usages"][0];
    assert_eq!(usage["name"], "runtime");
    assert_eq!(usage["artifacts"][0]["reference"], "webapp:1.2.0");

    // モジュール依存のみが含まれ、ファイル依存は除外される
    let dependencies = usage["dependencies"].as_array().unwrap();
    assert_eq!(dependencies.len(), 1);
    assert_eq!(dependencies[0]["name"], "postgres");
    assert_eq!(dependencies[0]["version"], "16.2");

    // ルール系は空集合として明示される
    assert_eq!(usage["dependency_constraints"].as_array().unwrap().len(), 0);
    assert_eq!(usage["capabilities"].as_array().unwrap().len(), 0);
    assert_eq!(usage["global_excludes"].as_array().unwrap().len(), 0);
}

/// --outputでメタデータをファイルに書き出せることを確認
#[test]
fn test_metadata_writes_to_file() {
    let project = TestProject::new();
    project.write_config(METADATA_CONFIG);

    let output_path = project.path().join("docker-component.json");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .env_remove("DOCKHAND_ENVIRONMENT")
        .args(["metadata", "--output", "docker-component.json"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["name"], "docker");
}

/// image設定が無いプロジェクトではmetadataがエラーになることを確認
#[test]
fn test_metadata_requires_image_config() {
    let project = TestProject::new();
    project.write_config("name: webapp");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("metadata")
        .assert()
        .failure()
        .stderr(predicate::str::contains("イメージ設定がありません"));
}

/// validateがサマリーを表示することを確認
#[test]
fn test_validate_prints_summary() {
    let project = TestProject::new();
    project.write_config(METADATA_CONFIG);

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("設定ファイルは正常です"))
        .stdout(predicate::str::contains("webapp"))
        .stdout(predicate::str::contains("依存: 2個"));
}
