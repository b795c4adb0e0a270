//! 検索プロキシ（/api/search）呼び出し

use appstore_preview_common::SearchResultSet;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const SEARCH_ENDPOINT: &str = "/api/search";
const FALLBACK_ERROR: &str = "Failed to fetch from iTunes API";

/// プロキシのエラーレスポンス
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// 検索語はエンコード済みで受け取る
pub fn search_path(encoded_term: &str) -> String {
    format!("{}?term={}", SEARCH_ENDPOINT, encoded_term)
}

/// レスポンス本文を解釈（非2xxは `{"error": ...}` のメッセージ）
pub fn parse_search_response(ok: bool, status: u16, body: &str) -> Result<SearchResultSet, String> {
    if !ok {
        return Err(serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("{} ({})", FALLBACK_ERROR, status)));
    }

    SearchResultSet::from_json(body).map_err(|e| e.to_string())
}

/// 競合アプリ検索
pub async fn search_apps(term: &str) -> Result<SearchResultSet, String> {
    let (ok, status, body) = fetch_search(term)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))?;

    parse_search_response(ok, status, &body)
}

async fn fetch_search(term: &str) -> Result<(bool, u16, String), JsValue> {
    let encoded: String = js_sys::encode_uri_component(term).into();
    let url = search_path(&encoded);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();

    Ok((resp.ok(), resp.status(), body))
}
