//! dockhand のコア機能
//!
//! プロジェクト設定（dockhand.yaml）のデータモデルとローダー、
//! および compose テンプレートの展開機能を提供します。

pub mod error;
pub mod loader;
pub mod model;
pub mod template;

pub use error::{DockhandError, Result};
pub use loader::{load_config, load_config_str};
pub use model::*;
pub use template::TemplateRenderer;
