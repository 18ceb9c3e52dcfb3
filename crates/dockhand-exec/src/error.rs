//! 実行エラー型

use thiserror::Error;

/// サブプロセス実行のエラー
#[derive(Debug, Error)]
pub enum ExecError {
    /// 子プロセスを起動できなかった（実行ファイル不在、権限不足など）
    #[error("Failed to launch command '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// 子プロセスが実行され、非ゼロで終了した
    ///
    /// メッセージはトークン列・終了コード・捕捉出力の順で固定。
    /// タイムスタンプ等の非決定的な要素は含まれません。
    #[error(
        "The command '[{}]' failed with exit code {}. Output:\n{}",
        .command_line.join(", "),
        .exit_code,
        .output
    )]
    NonZeroExit {
        command_line: Vec<String>,
        exit_code: i32,
        output: String,
    },

    /// 子プロセスの出力を複製している最中の入出力エラー
    #[error("I/O error while streaming command output: {0}")]
    Stream(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExecError>;
