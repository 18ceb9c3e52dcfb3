use colored::Colorize;
use dockhand_core::{DockhandError, TemplateRenderer};
use std::path::Path;

/// テンプレートからcomposeファイルを生成する
///
/// テンプレートには `project` と `versions`（モジュール依存の
/// 名前 → バージョン）が渡る。出力は決定的で、同じ設定からは
/// 同じcomposeファイルが生成される。
pub fn handle(config: &dockhand_core::ProjectConfig, project_root: &Path) -> anyhow::Result<()> {
    let template = config
        .compose
        .template
        .as_ref()
        .ok_or(DockhandError::TemplateNotConfigured)?;

    let template_path = project_root.join(template);
    let output_path = project_root.join(&config.compose.file);

    println!(
        "{}",
        format!(
            "▶ composeファイルを生成中... ({} → {})",
            template.display(),
            config.compose.file.display()
        )
        .blue()
    );

    let mut renderer = TemplateRenderer::from_project(config);
    renderer.add_env_variables();
    let rendered = renderer.render_file(&template_path)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&output_path, rendered)?;

    println!("{}", "✓ composeファイルを生成しました".green().bold());
    println!("  {}", output_path.display().to_string().cyan());

    Ok(())
}
