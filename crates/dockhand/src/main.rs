mod commands;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dock")]
#[command(about = "Dockerイメージのビルドとcomposeスタックの起動を、プロジェクト設定から。", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// composeスタックをデタッチモードで起動 (docker-compose up -d)
    Up,
    /// テンプレートからcomposeファイルを生成
    Generate,
    /// Dockerイメージをビルド
    Build {
        /// リポジトリ環境名 (dockhand.yaml の environments のキー)
        #[arg(short, long, env = "DOCKHAND_ENVIRONMENT")]
        environment: Option<String>,
        /// キャッシュを使用しない
        #[arg(long)]
        no_cache: bool,
    },
    /// ビルド済みイメージをリポジトリへプッシュ
    Push {
        /// リポジトリ環境名 (dockhand.yaml の environments のキー)
        #[arg(short, long, env = "DOCKHAND_ENVIRONMENT")]
        environment: Option<String>,
    },
    /// 公開メタデータ ("docker" コンポーネント) を出力
    Metadata {
        /// リポジトリ環境名 (イメージ参照の組み立てに使用)
        #[arg(short, long, env = "DOCKHAND_ENVIRONMENT")]
        environment: Option<String>,
        /// 書き出し先ファイル (省略時は標準出力)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 設定を検証
    Validate,
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt::init();

    match cli.command {
        // Versionコマンドは設定ファイル不要
        Commands::Version => {
            println!("dockhand {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        // Validateは発見からエラー表示まで自前で行う
        Commands::Validate => commands::validate::handle().await,
        Commands::Up => {
            let (config, project_root) = load_project()?;
            commands::up::handle(&config, &project_root).await
        }
        Commands::Generate => {
            let (config, project_root) = load_project()?;
            commands::generate::handle(&config, &project_root)
        }
        Commands::Build {
            environment,
            no_cache,
        } => {
            let (config, project_root) = load_project()?;
            commands::build::handle(&config, &project_root, environment.as_deref(), no_cache).await
        }
        Commands::Push { environment } => {
            let (config, project_root) = load_project()?;
            commands::push::handle(&config, &project_root, environment.as_deref()).await
        }
        Commands::Metadata {
            environment,
            output,
        } => {
            let (config, project_root) = load_project()?;
            commands::metadata::handle(
                &config,
                &project_root,
                environment.as_deref(),
                output.as_deref(),
            )
        }
    }
}

/// 設定ファイルを発見してロードする
///
/// プロジェクトルートは設定ファイルのあるディレクトリ。
/// ./.dockhand/ 内に置かれている場合はその親がルートになる。
fn load_project() -> anyhow::Result<(dockhand_core::ProjectConfig, PathBuf)> {
    let config_path = dockhand_config::find_config_file()?;
    let config = dockhand_core::load_config(&config_path)?;

    let mut project_root = config_path
        .parent()
        .unwrap_or(Path::new("."))
        .to_path_buf();
    if project_root.file_name().is_some_and(|name| name == ".dockhand")
        && let Some(parent) = project_root.parent()
    {
        project_root = parent.to_path_buf();
    }

    Ok((config, project_root))
}
