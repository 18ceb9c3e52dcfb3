//! プロセスランナー
//!
//! 子プロセスを完了まで実行し、出力を画面と捕捉バッファの両方へ複製します。
//! 長時間かかる `docker build` でも進捗がリアルタイムに見えること、
//! 失敗時には全出力つきのエラーで事後調査できることの両立が狙いです。

use crate::command::CommandSpec;
use crate::error::{ExecError, Result};
use std::process::Stdio;
use std::sync::{Mutex, PoisonError};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command;

/// 出力複製の読み取り単位
const TEE_CHUNK_SIZE: usize = 8192;

/// コマンドを実行し、終了コード 0 以外を失敗として報告する
///
/// 子プロセスの stdout は呼び出し元の stdout へ、stderr は stderr へ
/// そのまま流れます。同じバイト列は1つの捕捉バッファにも到着順で
/// 追記されます（stdout と stderr の相対順序は OS が届けた順のまま。
/// 並べ替えは行いません）。
///
/// 失敗時の [`ExecError::NonZeroExit`] には実行したトークン列・
/// 終了コード・捕捉した出力がそのまま入ります。シグナルで終了した
/// 子プロセスには終了コードが無いため `-1` として報告します。
///
/// タイムアウトや中断、リトライは提供しません。捕捉バッファにも
/// 上限はなく、出力量に比例してメモリを使います。
pub async fn run_checked(spec: &CommandSpec) -> Result<()> {
    let command_line = spec.command_line();
    tracing::debug!("Running: {}", spec.display_line());

    let mut cmd = Command::new(spec.program());
    cmd.args(spec.arg_list())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = spec.working_dir_path() {
        cmd.current_dir(dir);
    }
    for (key, value) in spec.env_overrides() {
        cmd.env(key, value);
    }

    let mut child = cmd.spawn().map_err(|source| ExecError::Launch {
        command: spec.display_line(),
        source,
    })?;

    // piped を指定しているので両ストリームは必ず存在する
    let child_stdout = child.stdout.take().expect("child stdout is piped");
    let child_stderr = child.stderr.take().expect("child stderr is piped");

    // 捕捉バッファは1回の実行ごとに専有。呼び出しをまたいで共有しない
    let capture = Mutex::new(Vec::new());

    // パイプのバッファが詰まってデッドロックしないよう、
    // 子プロセスの実行と並行して両ストリームを排出する
    let (status, stdout_result, stderr_result) = tokio::join!(
        child.wait(),
        tee(child_stdout, tokio::io::stdout(), &capture),
        tee(child_stderr, tokio::io::stderr(), &capture),
    );

    let status = status.map_err(ExecError::Stream)?;
    stdout_result?;
    stderr_result?;

    if status.success() {
        return Ok(());
    }

    let captured = capture.into_inner().unwrap_or_else(PoisonError::into_inner);
    Err(ExecError::NonZeroExit {
        command_line,
        exit_code: status.code().unwrap_or(-1),
        output: String::from_utf8_lossy(&captured).into_owned(),
    })
}

/// reader の内容を mirror と capture の両方へ複製する
async fn tee<R, W>(mut reader: R, mut mirror: W, capture: &Mutex<Vec<u8>>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; TEE_CHUNK_SIZE];
    loop {
        let read = reader.read(&mut buf).await?;
        if read == 0 {
            return Ok(());
        }
        mirror.write_all(&buf[..read]).await?;
        mirror.flush().await?;
        capture
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(&buf[..read]);
    }
}
