use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appstore-preview")]
#[command(about = "App Storeの掲載プレビュー・競合アプリ検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 検索プロキシ（とWeb UI）を起動
    Serve {
        /// 待ち受けホスト
        #[arg(long)]
        host: Option<String>,

        /// 待ち受けポート
        #[arg(short, long)]
        port: Option<u16>,

        /// Web UIのビルド出力（web-wasm/dist）
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },

    /// iTunes Search APIで競合アプリを検索
    Search {
        /// 検索語
        #[arg(required = true)]
        term: String,

        /// APIのJSONをそのまま出力
        #[arg(long)]
        json: bool,
    },

    /// スクリーンショットの配置を判定（先頭画像で縦横を決定）
    Measure {
        /// 画像ファイル（表示順）
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// 画像をData URIに変換して出力
    DataUri {
        /// 画像ファイル
        #[arg(required = true)]
        image: PathBuf,
    },

    /// 設定を管理
    Config {
        /// ポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// Web UIのディレクトリを設定
        #[arg(long)]
        set_static_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
