//! docker CLI コマンドラインの組み立て
//!
//! ここではコマンドラインを構築するだけで、実行は行いません。
//! 同じ入力からは同じトークン列が得られます（build_args / labels は
//! キー順で並びます）。

use dockhand_core::RepoEnvironment;
use dockhand_exec::CommandSpec;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 1回の `docker build` 実行の入力
#[derive(Debug, Clone)]
pub struct BuildInvocation {
    pub dockerfile: PathBuf,
    pub context: PathBuf,
    /// `-t` で付与するイメージ参照（少なくとも1つ）
    pub references: Vec<String>,
    pub build_args: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub target: Option<String>,
    pub no_cache: bool,
}

impl BuildInvocation {
    /// `docker build` のコマンド仕様に変換する
    pub fn to_command(&self) -> CommandSpec {
        let mut spec = CommandSpec::new("docker")
            .arg("build")
            .arg("-f")
            .arg(self.dockerfile.display().to_string());

        for reference in &self.references {
            spec = spec.arg("-t").arg(reference.as_str());
        }

        for (key, value) in &self.build_args {
            spec = spec.arg("--build-arg").arg(format!("{}={}", key, value));
        }

        for (key, value) in &self.labels {
            spec = spec.arg("--label").arg(format!("{}={}", key, value));
        }

        if let Some(target) = &self.target {
            spec = spec.arg("--target").arg(target.as_str());
        }

        if self.no_cache {
            spec = spec.arg("--no-cache");
        }

        spec.arg(self.context.display().to_string())
    }
}

/// `docker push` のコマンド仕様
pub fn push_command(reference: &str) -> CommandSpec {
    CommandSpec::new("docker").args(["push", reference])
}

/// `docker login` のコマンド仕様
///
/// 認証情報は加工せずそのまま渡す。認証情報を持たない環境では None。
pub fn login_command(environment: &RepoEnvironment) -> Option<CommandSpec> {
    match (&environment.username, &environment.password) {
        (Some(username), Some(password)) => Some(CommandSpec::new("docker").args([
            "login",
            "-u",
            username.as_str(),
            "-p",
            password.as_str(),
            environment.url.as_str(),
        ])),
        _ => None,
    }
}
