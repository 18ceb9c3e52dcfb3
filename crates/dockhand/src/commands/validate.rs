use colored::Colorize;

/// 設定を検証して内容を表示する
pub async fn handle() -> anyhow::Result<()> {
    println!("{}", "設定を検証中...".blue());

    match dockhand_config::find_config_file() {
        Ok(config_path) => {
            println!(
                "設定ファイル: {}",
                config_path.display().to_string().cyan()
            );

            match dockhand_core::load_config(&config_path) {
                Ok(config) => {
                    println!("{}", "✓ 設定ファイルは正常です！".green().bold());
                    println!();
                    println!("サマリー:");
                    println!("  プロジェクト: {}", config.name.cyan());
                    println!("  composeファイル: {}", config.compose.file.display());
                    if let Some(template) = &config.compose.template {
                        println!("  テンプレート: {}", template.display());
                    }
                    if let Some(image) = &config.image {
                        println!(
                            "  イメージ: {} ({}個のタグ)",
                            image.name.cyan(),
                            image.tag_list().len()
                        );
                    }
                    if !config.environments.is_empty() {
                        println!("  リポジトリ環境: {}個", config.environments.len());
                        for (name, env) in &config.environments {
                            let auth = if env.has_credentials() {
                                "認証あり"
                            } else {
                                "認証なし"
                            };
                            println!("    - {} ({}, {})", name.cyan(), env.url, auth);
                        }
                    }
                    if !config.dependencies.is_empty() {
                        println!(
                            "  依存: {}個 (モジュール{}個)",
                            config.dependencies.len(),
                            config.runtime_modules().len()
                        );
                    }
                }
                Err(e) => {
                    eprintln!();
                    eprintln!("{}", "✗ 設定エラー".red().bold());
                    eprintln!("  {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!();
            eprintln!("{}", "✗ 設定ファイルが見つかりません".red().bold());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
