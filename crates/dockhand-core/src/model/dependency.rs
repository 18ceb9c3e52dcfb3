//! "docker" 依存セット

use serde::{Deserialize, Serialize};

/// 依存の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    /// モジュール依存（名前とバージョンで解決される）
    Module,
    /// ファイル依存（ランタイム使用には含めない）
    File,
}

impl Default for DependencyKind {
    fn default() -> Self {
        Self::Module
    }
}

/// "docker" 依存セットの1エントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// 依存の名前（例: "postgres"）
    pub name: String,

    /// 解決済みバージョン（テンプレート展開とメタデータに使う）
    #[serde(default)]
    pub version: Option<String>,

    /// 種別（省略時は module）
    #[serde(default)]
    pub kind: DependencyKind,
}

impl Dependency {
    pub fn is_module(&self) -> bool {
        self.kind == DependencyKind::Module
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_module() {
        let dep: Dependency = serde_yaml::from_str("name: postgres\nversion: \"16.2\"").unwrap();
        assert!(dep.is_module());
        assert_eq!(dep.version.as_deref(), Some("16.2"));
    }

    #[test]
    fn test_file_kind_is_not_module() {
        let dep: Dependency = serde_yaml::from_str("name: seed\nkind: file").unwrap();
        assert!(!dep.is_module());
    }
}
