//! dockhand の Docker イメージビルド機能
//!
//! Dockerfile とビルドコンテキストの解決、イメージ参照の組み立て、
//! そして `docker build` / `docker push` / `docker login` の
//! コマンドライン構築を提供します。実行自体は dockhand-exec に委譲します。

pub mod error;
pub mod invocation;
pub mod resolver;

pub use error::{BuildError, Result};
pub use invocation::{BuildInvocation, login_command, push_command};
pub use resolver::BuildResolver;
