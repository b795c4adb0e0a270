use super::{error::ProxyError, AppState};
use appstore_preview_common::SearchQuery;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    term: Option<String>,
}

/// GET /api/search?term=...
///
/// 上流のJSONをそのまま中継する。検索語が無ければ上流へは送らない。
pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ProxyError> {
    info!(term = ?params.term, "Received search term");

    let query = params.term.and_then(SearchQuery::new).ok_or_else(|| {
        info!("No search term provided");
        ProxyError::MissingTerm
    })?;

    let body = state.client.fetch_raw(&query).await.map_err(|e| {
        error!(error = %e, term = query.term(), "Search failed");
        ProxyError::from(e)
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
