//! 公開メタデータのエラー型

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("メタデータのシリアライズに失敗しました: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("メタデータの書き込みに失敗しました: {path}\n理由: {message}")]
    Write { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, PublishError>;
