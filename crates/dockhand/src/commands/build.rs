use colored::Colorize;
use dockhand_build::{BuildInvocation, BuildResolver};
use std::collections::BTreeMap;
use std::path::Path;

/// Dockerイメージをビルドする
pub async fn handle(
    config: &dockhand_core::ProjectConfig,
    project_root: &Path,
    environment: Option<&str>,
    no_cache: bool,
) -> anyhow::Result<()> {
    let image = config.image_config()?;
    let repo_env = match environment {
        Some(name) => Some(config.environment(name)?),
        None => None,
    };

    let resolver = BuildResolver::new(project_root.to_path_buf());

    let dockerfile = resolver
        .resolve_dockerfile(image)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let context = resolver
        .resolve_context(image)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let variables: BTreeMap<String, String> = std::env::vars().collect();
    let build_args = resolver.resolve_build_args(image, &variables);
    let references = resolver.resolve_image_refs(image, repo_env);

    println!(
        "{}",
        format!("▶ {} をビルド中...", image.name).green().bold()
    );
    println!("  → Dockerfile: {}", dockerfile.display().to_string().cyan());
    println!("  → Context: {}", context.display().to_string().cyan());
    for reference in &references {
        println!("  → Image: {}", reference.cyan());
    }

    let invocation = BuildInvocation {
        dockerfile,
        context,
        references,
        build_args,
        labels: image.labels.clone(),
        target: image.target.clone(),
        no_cache,
    };

    dockhand_exec::run_checked(&invocation.to_command()).await?;

    println!("  {} ビルド完了", "✓".green());

    Ok(())
}
