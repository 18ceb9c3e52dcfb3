//! リポジトリ環境

use serde::{Deserialize, Serialize};

/// 環境ごとのイメージリポジトリ定義
///
/// URL と認証情報は検証・加工せず、そのまま `docker login` /
/// イメージ参照の組み立てに使います。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoEnvironment {
    /// リポジトリの URL プレフィックス（例: "registry.example.com/team"）
    pub url: String,

    /// docker login に使うユーザー名（省略時は login しない）
    #[serde(default)]
    pub username: Option<String>,

    /// docker login に使うパスワード
    #[serde(default)]
    pub password: Option<String>,
}

impl RepoEnvironment {
    /// login に十分な認証情報を持っているか
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}
