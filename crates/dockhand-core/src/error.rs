use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DockhandError {
    #[error("YAMLパースエラー: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("無効な設定: {0}")]
    InvalidConfig(String),

    #[error(
        "compose ファイルが見つかりません: {0}\nヒント: dockhand.yaml の compose.file を確認してください"
    )]
    ComposeFileNotFound(PathBuf),

    #[error(
        "compose テンプレートが設定されていません\nヒント: dockhand.yaml に compose.template を指定してください"
    )]
    TemplateNotConfigured,

    #[error("テンプレート展開エラー: {file}\n理由: {message}")]
    TemplateError { file: PathBuf, message: String },

    #[error("テンプレート展開エラー: {0}")]
    TemplateRenderError(String),

    #[error("リポジトリ環境が見つかりません: {name}\n利用可能: {available}")]
    EnvironmentNotFound { name: String, available: String },

    #[error("イメージ設定がありません\nヒント: dockhand.yaml に image セクションを追加してください")]
    ImageNotConfigured,
}

pub type Result<T> = std::result::Result<T, DockhandError>;
