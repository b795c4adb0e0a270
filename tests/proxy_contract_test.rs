//! 検索プロキシの契約テスト
//!
//! 偽の上流サーバー（iTunes Search API相当）とプロキシをローカルで起動して検証

use appstore_preview::config::Config;
use appstore_preview::itunes::ItunesClient;
use appstore_preview::server::{build_router, AppState};
use axum::{
    extract::Query,
    http::{header::CONTENT_TYPE, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
use tokio::net::TcpListener;

type Recorded = Arc<Mutex<Vec<HashMap<String, String>>>>;

const NOTION_BODY: &str = r#"{"resultCount":1,"results":[{"trackId":1,"trackName":"Notion","sellerName":"Notion Labs","screenshotUrls":[]}]}"#;

/// 受け取ったクエリを記録し、固定のレスポンスを返す上流
async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Recorded) {
    let requests: Recorded = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    let app = Router::new().route(
        "/search",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().unwrap().push(params);
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve upstream") });

    (format!("http://{addr}/search"), requests)
}

async fn spawn_proxy(upstream_url: String, static_dir: Option<&Path>) -> SocketAddr {
    let config = Config {
        upstream_url,
        ..Default::default()
    };
    let app = build_router(AppState::new(&config), static_dir);

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind proxy");
    let addr = listener.local_addr().expect("proxy addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve proxy") });
    addr
}

async fn get_text(url: String) -> (StatusCode, String) {
    let response = reqwest::get(url).await.expect("request failed");
    let status = response.status();
    let body = response.text().await.expect("read body");
    (status, body)
}

/// 正常系: 上流のJSONがそのまま返る
#[tokio::test]
async fn test_search_relays_upstream_body() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let proxy = spawn_proxy(upstream, None).await;

    let response = reqwest::get(format!("http://{proxy}/api/search?term=Notion"))
        .await
        .expect("request failed");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    assert_eq!(response.text().await.unwrap(), NOTION_BODY);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params["term"], "Notion");
    assert_eq!(params["country"], "jp");
    assert_eq!(params["media"], "software");
    assert_eq!(params["entity"], "software");
    assert_eq!(params["limit"], "10");
    assert_eq!(params["attributes"], appstore_preview_common::ATTRIBUTES);
}

/// 日本語・記号を含む検索語も変化せずに上流へ届く
#[tokio::test]
async fn test_search_forwards_term_verbatim() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let proxy = spawn_proxy(upstream, None).await;

    let (status, _) = get_text(format!(
        "http://{proxy}/api/search?term=%E5%AE%B6%E8%A8%88%E7%B0%BF%20%26%20memo"
    ))
    .await;
    assert_eq!(status, StatusCode::OK);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["term"], "家計簿 & memo");
}

/// 空白のみの検索語は空ではないので上流へ送る
#[tokio::test]
async fn test_whitespace_term_is_forwarded() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let proxy = spawn_proxy(upstream, None).await;

    let (status, _) = get_text(format!("http://{proxy}/api/search?term=%20%20")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(requests.lock().unwrap()[0]["term"], "  ");
}

/// 検索語なし: 400、上流へは送らない
#[tokio::test]
async fn test_missing_term_is_rejected() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let proxy = spawn_proxy(upstream, None).await;

    let (status, body) = get_text(format!("http://{proxy}/api/search")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_str(&body).expect("error body must be json");
    assert_eq!(json, serde_json::json!({ "error": "Search term is required" }));
    assert!(requests.lock().unwrap().is_empty());
}

/// 空の検索語: 400、上流へは送らない
#[tokio::test]
async fn test_empty_term_is_rejected() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let proxy = spawn_proxy(upstream, None).await;

    let (status, body) = get_text(format!("http://{proxy}/api/search?term=")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Search term is required"));
    assert!(requests.lock().unwrap().is_empty());
}

/// 上流が2xx以外: 500、ステータスを含むエラー
#[tokio::test]
async fn test_upstream_error_status() {
    for upstream_status in [
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let (upstream, requests) = spawn_upstream(upstream_status, r#"{"errorMessage":"x"}"#).await;
        let proxy = spawn_proxy(upstream, None).await;

        let (status, body) = get_text(format!("http://{proxy}/api/search?term=Notion")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json["error"],
            format!("Failed to fetch from App Store API: {}", upstream_status.as_u16())
        );
        // リトライしない
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}

/// 上流がJSON以外を返した: 500
#[tokio::test]
async fn test_upstream_malformed_body() {
    let (upstream, _) = spawn_upstream(StatusCode::OK, "<html>maintenance</html>").await;
    let proxy = spawn_proxy(upstream, None).await;

    let (status, body) = get_text(format!("http://{proxy}/api/search?term=Notion")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

/// 上流に接続できない: 500
#[tokio::test]
async fn test_upstream_unreachable() {
    let closed = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);

    let proxy = spawn_proxy(format!("http://{addr}/search"), None).await;

    let (status, body) = get_text(format!("http://{proxy}/api/search?term=Notion")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_health() {
    let proxy = spawn_proxy("http://127.0.0.1:9/search".to_string(), None).await;
    let (status, body) = get_text(format!("http://{proxy}/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

/// static_dir 指定時はWeb UIを配信、未知のパスは index.html
#[tokio::test]
async fn test_static_ui_served() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>preview</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let proxy = spawn_proxy("http://127.0.0.1:9/search".to_string(), Some(dir.path())).await;

    let (status, body) = get_text(format!("http://{proxy}/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>preview</html>");

    let (status, body) = get_text(format!("http://{proxy}/app.js")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1)");

    let (status, body) = get_text(format!("http://{proxy}/some/page")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<html>preview</html>");
}

/// static_dir なしではAPI以外は404
#[tokio::test]
async fn test_no_static_ui() {
    let proxy = spawn_proxy("http://127.0.0.1:9/search".to_string(), None).await;
    let (status, _) = get_text(format!("http://{proxy}/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// CLI用の型付き検索
#[tokio::test]
async fn test_client_typed_search() {
    let (upstream, requests) = spawn_upstream(StatusCode::OK, NOTION_BODY).await;
    let client = ItunesClient::new(upstream);

    let result = client.search("Notion").await.expect("search failed");
    assert_eq!(result.result_count, 1);
    assert_eq!(result.results[0].track_name, "Notion");
    assert_eq!(result.results[0].seller_name, "Notion Labs");
    assert_eq!(requests.lock().unwrap().len(), 1);
}
