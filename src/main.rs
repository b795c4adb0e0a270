use anyhow::Context;
use appstore_preview::{cli, config, image_loader, itunes, logging, server};
use appstore_preview_common::{format_count, rating_label, Orientation, TileSize};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load().context("設定の読み込みに失敗")?;

    match cli.command {
        Commands::Serve { host, port, static_dir } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if static_dir.is_some() {
                config.static_dir = static_dir;
            }

            println!("📱 appstore-preview - 検索プロキシ\n");
            println!("  API: http://{}/api/search?term=...", config.bind_address());
            match &config.static_dir {
                Some(dir) => println!("  UI:  {}", dir.display()),
                None => println!("  UI:  なし（--static-dir で web-wasm/dist を指定）"),
            }
            println!();

            server::run(&config).await?;
        }

        Commands::Search { term, json } => {
            let client = itunes::ItunesClient::new(config.upstream_url.clone());

            if json {
                let query = appstore_preview_common::SearchQuery::new(term)
                    .context("検索語が空です")?;
                let body = client.fetch_raw(&query).await?;
                println!("{}", String::from_utf8_lossy(&body));
                return Ok(());
            }

            println!("🔍 appstore-preview - 競合アプリ検索\n");
            let result = client.search(&term).await?;

            if result.results.is_empty() {
                println!("検索結果がありません");
                return Ok(());
            }

            println!("✔ {}件\n", format_count(result.result_count as u64));
            for (i, app) in result.results.iter().enumerate() {
                println!("{:>2}. {}", i + 1, app.track_name);
                println!("    {} / {}", app.seller_name, app.primary_genre_name);
                println!("    {}", rating_label(app));
                println!("    スクリーンショット: {}枚", app.screenshot_urls.len());
            }
        }

        Commands::Measure { images } => {
            println!("📐 appstore-preview - スクリーンショット配置\n");

            let (layout, tiles) = image_loader::plan_layout(&images)?;
            let orientation = match layout.orientation() {
                Some(Orientation::Landscape) => "横長（1枚・全幅）",
                Some(Orientation::Portrait) => "縦長（最大3枚・高さ144）",
                None => "未計測",
            };
            println!("向き: {}", orientation);
            if let Some(ratio) = layout.aspect_ratio() {
                println!("アスペクト比: {:.3}", ratio);
            }

            for tile in &tiles {
                let size = match tile.size {
                    TileSize::FullWidth { .. } => "100%".to_string(),
                    TileSize::FixedHeight { height, width } => format!("{:.1} x {:.0}", width, height),
                };
                println!("  [{}] {} ({})", tile.index + 1, tile.url, size);
            }

            if images.len() > tiles.len() {
                println!("\n{}枚は表示されません", images.len() - tiles.len());
            }
        }

        Commands::DataUri { image } => {
            let uri = image_loader::load_image_as_data_uri(&image)
                .with_context(|| format!("read {}", image.display()))?;
            println!("{}", uri);
        }

        Commands::Config { set_port, set_static_dir, show } => {
            // 保存するのはファイルの内容のみ（環境変数の上書きは含めない）
            let path = Config::config_path()?;
            let mut saved = Config::load_from(&path)?;

            if let Some(port) = set_port {
                saved.port = port;
                config.port = port;
                saved.save_to(&path)?;
                println!("✔ ポートを設定しました: {}", port);
            }

            if let Some(dir) = set_static_dir {
                saved.static_dir = Some(dir.clone());
                config.static_dir = Some(dir);
                saved.save_to(&path)?;
                println!("✔ Web UIのディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", path.display());
                println!("  待ち受け: {}", config.bind_address());
                println!("  上流API: {}", config.upstream_url);
                println!(
                    "  Web UI: {}",
                    config
                        .static_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "未設定".into())
                );
            }
        }
    }

    Ok(())
}
