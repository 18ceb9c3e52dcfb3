use colored::Colorize;
use dockhand_exec::CommandSpec;
use std::path::Path;

/// composeスタックをデタッチモードで起動する
///
/// `docker-compose -f <composeファイル> up -d` を実行するだけで、
/// 進捗の表示と失敗の報告はプロセスランナーに任せる。
pub async fn handle(
    config: &dockhand_core::ProjectConfig,
    project_root: &Path,
) -> anyhow::Result<()> {
    let compose_file = project_root.join(&config.compose.file);

    // 設定ミスは起動前に報告する
    if !compose_file.exists() {
        return Err(dockhand_core::DockhandError::ComposeFileNotFound(compose_file).into());
    }

    println!(
        "{}",
        format!(
            "▶ composeスタックを起動中... ({})",
            config.compose.file.display()
        )
        .blue()
    );

    let spec = CommandSpec::new("docker-compose")
        .arg("-f")
        .arg(compose_file.display().to_string())
        .args(["up", "-d"])
        .working_dir(project_root);

    dockhand_exec::run_checked(&spec).await?;

    println!("{}", "✓ composeスタックを起動しました".green().bold());

    Ok(())
}
