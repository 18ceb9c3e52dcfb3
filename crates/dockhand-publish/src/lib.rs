//! dockhand の公開メタデータ
//!
//! ビルドしたイメージを "docker" コンポーネントとして公開側に見せるための
//! メタデータを生成します。dockhand 自身は公開処理を行いません。
//! 生成した JSON ドキュメントを読むのはホスト側の公開基盤です。

pub mod component;
pub mod error;

pub use component::{Component, ModuleRef, PublishArtifact, UsageContext};
pub use error::{PublishError, Result};
