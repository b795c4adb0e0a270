use crate::error::{PreviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_UPSTREAM_URL: &str = "https://itunes.apple.com/search";

const ENV_HOST: &str = "APPSTORE_PREVIEW_HOST";
const ENV_PORT: &str = "APPSTORE_PREVIEW_PORT";
const ENV_UPSTREAM_URL: &str = "APPSTORE_PREVIEW_UPSTREAM_URL";
const ENV_STATIC_DIR: &str = "APPSTORE_PREVIEW_STATIC_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub upstream_url: String,
    /// Trunkのビルド出力（web-wasm/dist）。未設定ならAPIのみ提供
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            static_dir: None,
        }
    }
}

impl Config {
    /// 設定ファイル + 環境変数
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PreviewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("appstore-preview").join("config.json"))
    }

    /// 環境変数で上書き（テストのため取得関数を受け取る）
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = var(ENV_PORT) {
            self.port = port
                .parse()
                .map_err(|e| PreviewError::Config(format!("{ENV_PORT}={port}: {e}")))?;
        }
        if let Some(url) = var(ENV_UPSTREAM_URL) {
            self.upstream_url = url;
        }
        if let Some(dir) = var(ENV_STATIC_DIR) {
            self.static_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
