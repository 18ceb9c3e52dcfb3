use crate::error::{BuildError, Result};
use dockhand_core::{ImageConfig, RepoEnvironment};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub struct BuildResolver {
    project_root: PathBuf,
}

impl BuildResolver {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Dockerfileのパスを解決
    ///
    /// 検索順序:
    /// 1. 明示的な指定（image.dockerfileフィールド）
    /// 2. 規約ベース:
    ///    - ./Dockerfile
    ///    - ./docker/Dockerfile
    ///    - ./Dockerfile.{image-name}
    pub fn resolve_dockerfile(&self, image: &ImageConfig) -> Result<PathBuf> {
        // 明示的な指定がある場合
        if let Some(dockerfile) = &image.dockerfile {
            let path = self.project_root.join(dockerfile);
            if path.exists() {
                return Ok(path);
            } else {
                return Err(BuildError::DockerfileNotFound(path));
            }
        }

        // 規約ベースの検索
        let candidates = vec![
            "Dockerfile".to_string(),
            "docker/Dockerfile".to_string(),
            format!("Dockerfile.{}", image.name),
        ];

        for candidate in &candidates {
            let path = self.project_root.join(candidate);
            if path.exists() {
                tracing::debug!(
                    "Found Dockerfile for image '{}' at: {}",
                    image.name,
                    path.display()
                );
                return Ok(path);
            }
        }

        Err(BuildError::DockerfileNotFound(
            self.project_root.join("Dockerfile"),
        ))
    }

    /// ビルドコンテキストのパスを解決
    ///
    /// デフォルトはプロジェクトルート
    pub fn resolve_context(&self, image: &ImageConfig) -> Result<PathBuf> {
        let context = match &image.context {
            Some(ctx) => self.project_root.join(ctx),
            None => self.project_root.clone(),
        };

        if !context.exists() {
            return Err(BuildError::ContextNotFound(context));
        }

        if !context.is_dir() {
            return Err(BuildError::InvalidConfig(format!(
                "Build context is not a directory: {}",
                context.display()
            )));
        }

        Ok(context)
    }

    /// ビルド引数の変数展開
    ///
    /// 値の中の {VAR_NAME} を variables の値に置換する
    pub fn resolve_build_args(
        &self,
        image: &ImageConfig,
        variables: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let mut resolved_args = BTreeMap::new();

        for (key, value) in &image.build_args {
            self.validate_build_arg(key);
            let resolved_value = self.expand_variables(value, variables);
            resolved_args.insert(key.clone(), resolved_value);
        }

        resolved_args
    }

    fn expand_variables(&self, template: &str, variables: &BTreeMap<String, String>) -> String {
        let mut result = template.to_string();

        for (key, value) in variables {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }

        result
    }

    /// イメージ参照の一覧を解決
    ///
    /// タグごとに1参照。environment が指定されていればその URL を
    /// プレフィックスとして `<url>/<name>:<tag>` 形式にする。
    /// URL は検証せずそのまま連結する。
    pub fn resolve_image_refs(
        &self,
        image: &ImageConfig,
        environment: Option<&RepoEnvironment>,
    ) -> Vec<String> {
        let repository = match environment {
            Some(env) => format!("{}/{}", env.url, image.name),
            None => image.name.clone(),
        };

        image
            .tag_list()
            .iter()
            .map(|tag| format!("{}:{}", repository, tag))
            .collect()
    }

    /// ビルド引数の検証（機密情報の警告）
    fn validate_build_arg(&self, key: &str) {
        let sensitive_patterns = ["password", "token", "secret", "api_key", "private_key"];

        let key_lower = key.to_lowercase();
        for pattern in &sensitive_patterns {
            if key_lower.contains(pattern) {
                tracing::warn!(
                    "警告: ビルド引数 '{}' は機密情報を含む可能性があります。\n\
                     ビルド引数はイメージ履歴に記録されます。\n\
                     機密情報はビルド引数ではなく、環境変数やシークレットマウントを使用してください。",
                    key
                );
            }
        }
    }
}
