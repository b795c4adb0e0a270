//! iTunes Search APIのレスポンス型
//!
//! プロキシとWeb(WASM)で共有される型:
//! - SearchResultSet: 検索結果全体（件数 + アプリ一覧）
//! - App: 検索結果の1アプリ（読み取り専用）
//!
//! 形はApple側で定義されているため、欠けたフィールドはデフォルト値、
//! 未知のフィールドは無視する。

use serde::{Deserialize, Serialize};

/// 検索結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultSet {
    pub result_count: usize,
    pub results: Vec<App>,
}

impl SearchResultSet {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// 検索結果のアプリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct App {
    pub track_id: u64,
    pub track_name: String,
    pub seller_name: String,
    pub artwork_url512: String,
    pub screenshot_urls: Vec<String>,
    pub description: String,

    /// 評価がまだ無いアプリではフィールド自体が省略される
    pub average_user_rating: Option<f64>,

    pub user_rating_count: u64,
    pub primary_genre_name: String,
    pub price: f64,
    pub subtitle: String,
}

impl App {
    /// 表示できる評価があるか（未評価・0件は「評価なし」扱い）
    pub fn has_rating(&self) -> bool {
        matches!(self.average_user_rating, Some(r) if r > 0.0) && self.user_rating_count > 0
    }
}
