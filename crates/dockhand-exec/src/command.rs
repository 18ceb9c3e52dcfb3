//! コマンド仕様

use std::path::{Path, PathBuf};

/// 1回の実行に対応するコマンド仕様
///
/// 実行するプログラムと引数列、および実行オプション（作業ディレクトリ、
/// 環境変数の上書き）を保持します。構築後は変更せず、1回の
/// [`run_checked`](crate::runner::run_checked) 呼び出しに対して
/// 1つの仕様を使います。
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CommandSpec {
    /// プログラム名のみのコマンド仕様を作成
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            envs: Vec::new(),
        }
    }

    /// 引数を1つ追加
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// 引数をまとめて追加
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// 作業ディレクトリを指定
    pub fn working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// 子プロセスの環境変数を上書き
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arg_list(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn working_dir_path(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub(crate) fn env_overrides(&self) -> &[(String, String)] {
        &self.envs
    }

    /// 実行されるトークン列（プログラム + 引数）
    pub fn command_line(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(1 + self.args.len());
        tokens.push(self.program.clone());
        tokens.extend(self.args.iter().cloned());
        tokens
    }

    /// ログ表示用の1行表現
    pub fn display_line(&self) -> String {
        self.command_line().join(" ")
    }
}
