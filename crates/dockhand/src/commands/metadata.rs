use colored::Colorize;
use dockhand_build::BuildResolver;
use dockhand_publish::{Component, PublishArtifact};
use std::path::Path;

/// 公開メタデータ ("docker" コンポーネント) を出力する
pub fn handle(
    config: &dockhand_core::ProjectConfig,
    project_root: &Path,
    environment: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let image = config.image_config()?;
    let repo_env = match environment {
        Some(name) => Some(config.environment(name)?),
        None => None,
    };

    let resolver = BuildResolver::new(project_root.to_path_buf());
    // 先頭のタグが代表参照になる
    let reference = resolver
        .resolve_image_refs(image, repo_env)
        .into_iter()
        .next()
        .unwrap_or_default();

    let artifact = PublishArtifact {
        name: image.name.clone(),
        artifact_type: "docker-image".to_string(),
        reference,
        classifier: None,
    };

    let component = Component::docker(artifact, &config.dependencies);

    match output {
        Some(path) => {
            component.write_to(path)?;
            println!("{}", "✓ メタデータを書き出しました".green().bold());
            println!("  {}", path.display().to_string().cyan());
        }
        None => {
            println!("{}", component.to_json()?);
        }
    }

    Ok(())
}
