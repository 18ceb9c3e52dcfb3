//! "docker" コンポーネント
//!
//! 公開側から見えるコンポーネントは常に名前 "docker"、使用コンテキストは
//! "runtime" の1つだけ。コンテキストは1つの公開アーティファクトと、
//! 依存セットからモジュール依存のみを抜き出したリストを持ちます。
//! 依存制約・ケイパビリティ・除外ルールは持ちません（空で直列化します）。

use crate::error::{PublishError, Result};
use dockhand_core::Dependency;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// コンポーネント名（固定）
pub const COMPONENT_NAME: &str = "docker";

/// 使用コンテキスト名（固定）
pub const RUNTIME_USAGE: &str = "runtime";

/// 公開されるアーティファクト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishArtifact {
    /// アーティファクト名（通常はイメージ名）
    pub name: String,

    /// アーティファクトの種別（例: "docker-image"）
    #[serde(rename = "type")]
    pub artifact_type: String,

    /// イメージ参照（例: "registry.example.com/webapp:1.2.0"）
    pub reference: String,

    /// 分類子（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

/// 使用コンテキストが参照するモジュール依存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRef {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// 使用コンテキスト
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageContext {
    pub name: String,
    pub artifacts: Vec<PublishArtifact>,
    pub dependencies: Vec<ModuleRef>,
    /// 常に空。読み手が形を仮定しなくて済むよう明示的に直列化する
    pub dependency_constraints: Vec<String>,
    pub capabilities: Vec<String>,
    pub global_excludes: Vec<String>,
}

/// 公開コンポーネント
///
/// 構築後は変更しないメタデータ。ホストの公開基盤が読むだけで、
/// dockhand 側から更新することはありません。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub usages: Vec<UsageContext>,
}

impl Component {
    /// "docker" コンポーネントを構築する
    ///
    /// 依存セットのうちモジュール依存だけが runtime コンテキストに入る。
    pub fn docker(artifact: PublishArtifact, dependencies: &[Dependency]) -> Self {
        let module_refs = dependencies
            .iter()
            .filter(|d| d.is_module())
            .map(|d| ModuleRef {
                name: d.name.clone(),
                version: d.version.clone(),
            })
            .collect();

        Self {
            name: COMPONENT_NAME.to_string(),
            usages: vec![UsageContext {
                name: RUNTIME_USAGE.to_string(),
                artifacts: vec![artifact],
                dependencies: module_refs,
                dependency_constraints: Vec::new(),
                capabilities: Vec::new(),
                global_excludes: Vec::new(),
            }],
        }
    }

    /// JSON ドキュメントとして直列化する
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON ドキュメントをファイルへ書き出す
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| PublishError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
