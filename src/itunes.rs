//! iTunes Search APIクライアント
//!
//! 検索語以外のパラメータは固定（`appstore_preview_common::query`）。
//! リトライ・キャッシュはしない。

use crate::error::{PreviewError, Result};
use appstore_preview_common::{SearchQuery, SearchResultSet};
use axum::body::Bytes;
use reqwest::Url;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ItunesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        Url::parse_with_params(&self.base_url, query.pairs())
            .map_err(|e| PreviewError::Config(format!("upstream_url {}: {}", self.base_url, e)))
    }

    /// 上流のJSONをそのまま返す（JSONとして読めるかだけ確認）
    pub async fn fetch_raw(&self, query: &SearchQuery) -> Result<Bytes> {
        let url = self.search_url(query)?;
        info!(%url, "Fetching from App Store API");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        info!(status = status.as_u16(), "App Store API responded");

        if !status.is_success() {
            return Err(PreviewError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;
        debug!(bytes = body.len(), "Received App Store API body");

        Ok(body)
    }

    /// 型付きで検索（CLI用）
    pub async fn search(&self, term: &str) -> Result<SearchResultSet> {
        let query = SearchQuery::new(term).ok_or(PreviewError::EmptyTerm)?;
        let body = self.fetch_raw(&query).await?;
        Ok(SearchResultSet::from_slice(&body)?)
    }
}
