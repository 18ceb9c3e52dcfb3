use colored::Colorize;
use dockhand_build::{BuildResolver, login_command, push_command};
use std::path::Path;

/// ビルド済みイメージをリポジトリへプッシュする
///
/// 選択した環境が認証情報を持つ場合は先に `docker login` を実行する。
/// 認証情報は検証せずそのまま渡す。
pub async fn handle(
    config: &dockhand_core::ProjectConfig,
    project_root: &Path,
    environment: Option<&str>,
) -> anyhow::Result<()> {
    let image = config.image_config()?;
    let repo_env = match environment {
        Some(name) => Some(config.environment(name)?),
        None => None,
    };

    if let Some(env) = repo_env
        && let Some(login) = login_command(env)
    {
        println!("{}", format!("▶ {} にログイン中...", env.url).blue());
        dockhand_exec::run_checked(&login).await?;
    }

    let resolver = BuildResolver::new(project_root.to_path_buf());
    let references = resolver.resolve_image_refs(image, repo_env);

    for reference in &references {
        println!(
            "{}",
            format!("▶ {} をプッシュ中...", reference).green().bold()
        );
        dockhand_exec::run_checked(&push_command(reference)).await?;
    }

    println!("{}", "✓ すべてのイメージをプッシュしました".green().bold());

    Ok(())
}
