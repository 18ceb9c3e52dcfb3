//! 設定ファイルのローダー

use crate::error::{DockhandError, Result};
use crate::model::ProjectConfig;
use std::path::Path;

/// dockhand.yaml を読み込んで検証する
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    tracing::debug!("Loading config from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| DockhandError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_config_str(&content)
}

/// YAML 文字列から設定を読み込む
pub fn load_config_str(content: &str) -> Result<ProjectConfig> {
    let config: ProjectConfig = serde_yaml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// 構造的な最低限の検証
///
/// リポジトリ環境の URL・認証情報は検証しない（そのまま docker CLI へ渡す）。
fn validate(config: &ProjectConfig) -> Result<()> {
    if config.name.trim().is_empty() {
        return Err(DockhandError::InvalidConfig(
            "name が空です".to_string(),
        ));
    }

    if let Some(image) = &config.image
        && image.name.trim().is_empty()
    {
        return Err(DockhandError::InvalidConfig(
            "image.name が空です".to_string(),
        ));
    }

    for dep in &config.dependencies {
        if dep.name.trim().is_empty() {
            return Err(DockhandError::InvalidConfig(
                "dependencies に名前のないエントリがあります".to_string(),
            ));
        }
    }

    Ok(())
}
