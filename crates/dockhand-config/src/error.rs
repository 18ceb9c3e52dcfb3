use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("設定ディレクトリが見つかりません")]
    ConfigDirNotFound,

    #[error(
        "設定ファイルが見つかりません。以下の場所を確認してください:\n\
        - カレントディレクトリ: dockhand.yaml, dockhand.local.yaml, .dockhand.yaml, .dockhand.local.yaml\n\
        - ./.dockhand/ ディレクトリ\n\
        - ~/.config/dockhand/dockhand.yaml\n\
        または DOCKHAND_CONFIG_PATH 環境変数で直接指定できます"
    )]
    ConfigFileNotFound,

    #[error("IO エラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
