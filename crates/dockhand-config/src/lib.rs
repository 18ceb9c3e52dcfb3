pub mod error;

pub use error::*;

use std::path::PathBuf;

/// dockhand のユーザー設定ディレクトリを取得
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(ConfigError::ConfigDirNotFound)?
        .join("dockhand");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
    }

    Ok(config_dir)
}

/// プロジェクトの dockhand.yaml ファイルを探す
///
/// 以下の優先順位で設定ファイルを検索:
/// 1. 環境変数 DOCKHAND_CONFIG_PATH (直接パス指定)
/// 2. カレントディレクトリ: dockhand.local.yaml, .dockhand.local.yaml, dockhand.yaml, .dockhand.yaml
/// 3. ./.dockhand/ ディレクトリ内: 同様の順序
/// 4. ~/.config/dockhand/dockhand.yaml (グローバル設定)
pub fn find_config_file() -> Result<PathBuf> {
    // 1. 環境変数で直接指定
    if let Ok(config_path) = std::env::var("DOCKHAND_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;
    let candidates = [
        "dockhand.local.yaml",
        ".dockhand.local.yaml",
        "dockhand.yaml",
        ".dockhand.yaml",
    ];

    // 2. カレントディレクトリで検索
    for filename in &candidates {
        let path = current_dir.join(filename);
        if path.exists() {
            return Ok(path);
        }
    }

    // 3. ./.dockhand/ ディレクトリで検索
    let dockhand_dir = current_dir.join(".dockhand");
    if dockhand_dir.is_dir() {
        for filename in &candidates {
            let path = dockhand_dir.join(filename);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    // 4. グローバル設定ファイル (~/.config/dockhand/dockhand.yaml)
    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("dockhand").join("dockhand.yaml");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    // どの設定ファイルも見つからなかった
    Err(ConfigError::ConfigFileNotFound)
}
