//! 検索プロキシサーバー
//!
//! - GET /api/search?term=... : iTunes Search APIへの中継
//! - GET /healthz : 死活確認
//! - それ以外 : static_dir が設定されていればWeb UI（Trunkのdist）を配信

pub mod error;
pub mod handlers;

use crate::config::Config;
use crate::error::Result;
use crate::itunes::ItunesClient;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use handlers::{health_handler, search_handler};
use std::{path::Path, sync::Arc, time::Duration};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub struct AppState {
    pub client: ItunesClient,
}

impl AppState {
    pub fn new(config: &Config) -> Arc<Self> {
        Arc::new(Self {
            client: ItunesClient::new(config.upstream_url.clone()),
        })
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let mut router = Router::new()
        .route("/api/search", get(search_handler))
        .route("/healthz", get(health_handler));

    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: &Config) -> Result<()> {
    let state = AppState::new(config);
    info!(upstream = %state.client.base_url(), "Initialized state");

    if let Some(dir) = &config.static_dir {
        if !dir.join("index.html").exists() {
            warn!(dir = %dir.display(), "index.html not found in static_dir");
        }
    }

    let app = build_router(state, config.static_dir.as_deref());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
