//! App Store 掲載プレビュー
//!
//! iTunes Search APIへの検索プロキシと、Web UI配信・CLIツール。

pub mod cli;
pub mod config;
pub mod error;
pub mod image_loader;
pub mod itunes;
pub mod logging;
pub mod server;
