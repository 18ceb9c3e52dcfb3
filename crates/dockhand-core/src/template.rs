//! compose テンプレートの展開
//!
//! Tera を使って compose ファイルのテンプレートを展開します。
//! 依存セットの解決済みバージョンを `versions` マップとして注入するので、
//! テンプレート側でサービスのイメージタグを依存バージョンに固定できます。
//!
//! ```yaml
//! services:
//!   db:
//!     image: postgres:{{ versions.postgres }}
//! ```

use crate::error::{DockhandError, Result};
use crate::model::ProjectConfig;
use std::collections::BTreeMap;
use std::path::Path;
use tera::{Context, Tera};
use tracing::{debug, info};

/// テンプレートに渡してよい環境変数のプレフィックス
const ALLOWED_ENV_PREFIXES: &[&str] = &["DOCKHAND_", "CI_", "APP_"];

/// compose テンプレートのレンダラー
pub struct TemplateRenderer {
    tera: Tera,
    context: Context,
}

impl TemplateRenderer {
    /// 空のコンテキストでレンダラーを作成
    pub fn new() -> Self {
        Self {
            tera: Tera::default(),
            context: Context::new(),
        }
    }

    /// プロジェクト設定からレンダラーを作成
    ///
    /// `project`（プロジェクト名）と `versions`（モジュール依存の
    /// 名前 → バージョン）をコンテキストに載せます。
    pub fn from_project(config: &ProjectConfig) -> Self {
        let mut renderer = Self::new();
        renderer
            .context
            .insert("project", &config.name);

        let mut versions = BTreeMap::new();
        for dep in config.runtime_modules() {
            if let Some(version) = &dep.version {
                versions.insert(dep.name.clone(), version.clone());
            }
        }
        renderer.context.insert("versions", &versions);

        renderer
    }

    /// 変数を追加
    pub fn add_variable(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.context.insert(key.into(), &value);
    }

    /// 環境変数を追加（許可されたプレフィックスのみ）
    ///
    /// 任意の環境変数をテンプレートへ流すと秘密情報が生成物に混入しうるため、
    /// DOCKHAND_*, CI_*, APP_* に限定します。
    #[tracing::instrument(skip(self))]
    pub fn add_env_variables(&mut self) {
        let mut count = 0;

        for (key, value) in std::env::vars() {
            if ALLOWED_ENV_PREFIXES
                .iter()
                .any(|prefix| key.starts_with(prefix))
            {
                debug!(key = %key, "Adding environment variable");
                self.context.insert(key, &serde_json::Value::String(value));
                count += 1;
            }
        }

        info!(env_var_count = count, "Added filtered environment variables");
    }

    /// 文字列をテンプレートとして展開
    pub fn render_str(&mut self, template: &str) -> Result<String> {
        self.tera
            .render_str(template, &self.context)
            .map_err(|e| DockhandError::TemplateRenderError(e.to_string()))
    }

    /// ファイルをテンプレートとして展開
    pub fn render_file(&mut self, path: &Path) -> Result<String> {
        let template = std::fs::read_to_string(path).map_err(|e| DockhandError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        self.tera
            .render_str(&template, &self.context)
            .map_err(|e| DockhandError::TemplateError {
                file: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
