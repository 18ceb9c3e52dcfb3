//! プロジェクト設定のルート

use crate::error::{DockhandError, Result};
use crate::model::{ComposeConfig, Dependency, ImageConfig, RepoEnvironment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// dockhand.yaml 全体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// プロジェクト名
    pub name: String,

    /// compose スタックの設定
    #[serde(default)]
    pub compose: ComposeConfig,

    /// Docker イメージビルドの設定（ビルドしないプロジェクトでは省略可）
    #[serde(default)]
    pub image: Option<ImageConfig>,

    /// リポジトリ環境のマップ（環境名 → URL・認証情報）
    ///
    /// 値は検証せずそのまま docker CLI へ渡します。
    #[serde(default)]
    pub environments: BTreeMap<String, RepoEnvironment>,

    /// "docker" 依存セット
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ProjectConfig {
    /// 名前でリポジトリ環境を引く
    pub fn environment(&self, name: &str) -> Result<&RepoEnvironment> {
        self.environments
            .get(name)
            .ok_or_else(|| DockhandError::EnvironmentNotFound {
                name: name.to_string(),
                available: self
                    .environments
                    .keys()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// イメージ設定を要求する（build / push 系の操作で使用）
    pub fn image_config(&self) -> Result<&ImageConfig> {
        self.image.as_ref().ok_or(DockhandError::ImageNotConfigured)
    }

    /// ランタイムのモジュール依存のみを返す
    pub fn runtime_modules(&self) -> Vec<&Dependency> {
        self.dependencies.iter().filter(|d| d.is_module()).collect()
    }
}
