use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestProject {
    pub root: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        Self { root }
    }

    pub fn write_config(&self, content: &str) {
        let path = self.root.path().join("dockhand.yaml");
        fs::write(path, content).unwrap();
    }

    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.root.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// bin/ 以下に実行可能なスタブコマンドを作成する
    ///
    /// スタブは PATH の先頭に bin/ を置くことで docker / docker-compose の
    /// 代わりに呼び出される。
    #[allow(dead_code)]
    pub fn write_stub(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin_dir = self.root.path().join("bin");
        fs::create_dir_all(&bin_dir).unwrap();

        let path = bin_dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();

        path
    }

    /// bin/ を先頭に置いた PATH 環境変数の値
    #[allow(dead_code)]
    pub fn stub_path_env(&self) -> String {
        format!(
            "{}:{}",
            self.root.path().join("bin").display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }

    pub fn path(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }
}
