//! compose スタックの設定

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `docker-compose` に渡すファイルと、その生成元テンプレート
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposeConfig {
    /// compose ファイルのパス（プロジェクトルートからの相対）
    #[serde(default = "default_compose_file")]
    pub file: PathBuf,

    /// generate 操作が展開するテンプレート（省略時は generate 不可）
    #[serde(default)]
    pub template: Option<PathBuf>,
}

fn default_compose_file() -> PathBuf {
    PathBuf::from("docker-compose.yml")
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            file: default_compose_file(),
            template: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_compose_file() {
        let config = ComposeConfig::default();
        assert_eq!(config.file, PathBuf::from("docker-compose.yml"));
        assert!(config.template.is_none());
    }
}
