#![allow(deprecated)] // TODO: cargo_bin → cargo_bin_cmd! へ移行

mod common;

use assert_cmd::Command;
use common::TestProject;
use predicates::prelude::*;

/// upがスタブした docker-compose を正しい引数で呼び出すことを確認
#[test]
fn test_up_invokes_docker_compose_detached() {
    let project = TestProject::new();
    project.write_config("name: webapp");
    project.write_file("docker-compose.yml", "services: {}\n");
    project.write_stub(
        "docker-compose",
        "echo \"$@\" > \"$DOCKHAND_STUB_LOG\"; echo 'Creating network...'",
    );

    let log_path = project.path().join("invocation.log");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env("PATH", project.stub_path_env())
        .env("DOCKHAND_STUB_LOG", log_path.display().to_string())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("up")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating network..."));

    // docker-compose -f <composeファイル> up -d の形で呼び出されている
    let logged = std::fs::read_to_string(&log_path).unwrap();
    let logged = logged.trim();
    assert!(logged.starts_with("-f "), "unexpected args: {}", logged);
    assert!(logged.contains("docker-compose.yml"));
    assert!(logged.ends_with("up -d"));
}

/// up失敗時にコマンドライン・終了コード・出力が報告されることを確認
#[test]
fn test_up_failure_reports_command_code_and_output() {
    let project = TestProject::new();
    project.write_config("name: webapp");
    project.write_file("docker-compose.yml", "services: {}\n");
    project.write_stub("docker-compose", "echo 'ERROR: no such file' >&2; exit 1");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env("PATH", project.stub_path_env())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("up")
        .assert()
        .failure()
        .stderr(predicate::str::contains("docker-compose"))
        .stderr(predicate::str::contains("exit code 1"))
        .stderr(predicate::str::contains("ERROR: no such file"));
}

/// composeファイルが存在しない場合は起動せずにエラーになることを確認
#[test]
fn test_up_missing_compose_file() {
    let project = TestProject::new();
    project.write_config("name: webapp");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("up")
        .assert()
        .failure()
        .stderr(predicate::str::contains("compose ファイルが見つかりません"));
}

/// generateがテンプレートにバージョンを注入することを確認
#[test]
fn test_generate_renders_template() {
    let project = TestProject::new();
    project.write_config(
        r#"
name: webapp
compose:
  file: docker-compose.yml
  template: docker-compose.yml.tera
dependencies:
  - name: postgres
    version: "16.2"
"#,
    );
    project.write_file(
        "docker-compose.yml.tera",
        "services:\n  db:\n    image: postgres:{{ versions.postgres }}\n    container_name: {{ project }}-db\n",
    );

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("generate")
        .assert()
        .success();

    let rendered = std::fs::read_to_string(project.path().join("docker-compose.yml")).unwrap();
    assert!(rendered.contains("image: postgres:16.2"));
    assert!(rendered.contains("container_name: webapp-db"));
}

/// テンプレート未設定でgenerateを実行するとエラーになることを確認
#[test]
fn test_generate_without_template() {
    let project = TestProject::new();
    project.write_config("name: webapp");

    let mut cmd = Command::cargo_bin("dock").unwrap();
    cmd.current_dir(project.path())
        .env_remove("DOCKHAND_CONFIG_PATH")
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("compose.template"));
}
