use crate::error::PreviewError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const GENERIC_UPSTREAM_ERROR: &str = "Failed to fetch from App Store API";

/// プロキシが返すエラー。すべて `{"error": message}` のJSONになる
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Search term is required")]
    MissingTerm,

    #[error("Failed to fetch from App Store API: {0}")]
    UpstreamStatus(u16),

    #[error("{0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingTerm => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamStatus(_) | ProxyError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<PreviewError> for ProxyError {
    fn from(err: PreviewError) -> Self {
        match err {
            PreviewError::UpstreamStatus(status) => ProxyError::UpstreamStatus(status),
            PreviewError::EmptyTerm => ProxyError::MissingTerm,
            other => {
                let message = other.to_string();
                if message.trim().is_empty() {
                    ProxyError::Upstream(GENERIC_UPSTREAM_ERROR.to_string())
                } else {
                    ProxyError::Upstream(message)
                }
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
