//! イメージビルドの設定

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// `docker build` の入力になる設定
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// イメージ名（例: "webapp"）
    pub name: String,

    /// Dockerfile のパス（省略時は規約ベースで検索）
    #[serde(default)]
    pub dockerfile: Option<PathBuf>,

    /// ビルドコンテキスト（省略時はプロジェクトルート）
    #[serde(default)]
    pub context: Option<PathBuf>,

    /// マルチステージビルドのターゲットステージ
    #[serde(default)]
    pub target: Option<String>,

    /// タグの一覧（空の場合は "latest"）
    #[serde(default)]
    pub tags: Vec<String>,

    /// ビルド引数（値の {VAR} は環境変数で展開される）
    #[serde(default)]
    pub build_args: BTreeMap<String, String>,

    /// イメージに付与するラベル
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl ImageConfig {
    /// タグ一覧（未指定なら latest のみ）
    pub fn tag_list(&self) -> Vec<String> {
        if self.tags.is_empty() {
            vec!["latest".to_string()]
        } else {
            self.tags.clone()
        }
    }
}
