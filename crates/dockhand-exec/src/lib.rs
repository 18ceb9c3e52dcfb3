//! 検査付きサブプロセス実行
//!
//! Docker CLI などの外部コマンドを子プロセスとして実行し、stdout/stderr を
//! 呼び出し元の標準ストリームへリアルタイムに流しつつ、同じバイト列を
//! 失敗報告用のバッファにも複製します（tee）。
//!
//! 非ゼロ終了は必ず [`ExecError::NonZeroExit`] として報告され、
//! 実行したコマンドライン・終了コード・捕捉した出力の3点が揃った
//! エラーメッセージになります。再実行せずに原因を調査できることが目的です。

pub mod command;
pub mod error;
pub mod runner;

pub use command::CommandSpec;
pub use error::{ExecError, Result};
pub use runner::run_checked;
