//! メインアプリケーションコンポーネント

use crate::api::search::search_apps;
use crate::components::{
    phone_frame::PhoneFrame,
    search_bar::SearchBar,
    upload_form::UploadForm,
};
use crate::file_reader::{read_as_data_uri, selected_file};
use appstore_preview_common::PreviewState;
use leptos::callback::Callback;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面の状態はすべて PreviewState に集約
    let state = RwSignal::new(PreviewState::new());

    let on_search = Callback::new(move |()| run_search(state));

    view! {
        <main class="page">
            <div class="layout">
                <div class="left-column">
                    <SearchBar state=state on_search=on_search />
                    <PhoneFrame state=state />
                </div>
                <UploadForm state=state />
            </div>
        </main>
    }
}

/// 検索実行。古いリクエストの応答は PreviewState 側で破棄される
fn run_search(state: RwSignal<PreviewState>) {
    let mut ticket = None;
    state.update(|s| ticket = s.begin_search());
    let Some(ticket) = ticket else {
        return;
    };

    gloo::console::log!(format!("Searching for: {}", ticket.term()));

    spawn_local(async move {
        let outcome = search_apps(ticket.term()).await;
        match &outcome {
            Ok(result) => gloo::console::log!(format!("Search results: {}", result.result_count)),
            Err(e) => gloo::console::error!(format!("Search failed: {}", e)),
        }

        state.update(|s| {
            if !s.complete_search(&ticket, outcome) {
                gloo::console::log!(format!(
                    "Discarded stale search #{} ({})",
                    ticket.generation(),
                    ticket.term()
                ));
            }
        });
    });
}

/// アイコンのアップロード
pub fn upload_icon(state: RwSignal<PreviewState>, ev: &web_sys::Event) {
    let Some(file) = selected_file(ev) else {
        return;
    };

    spawn_local(async move {
        match read_as_data_uri(file).await {
            Ok(data_uri) => state.update(|s| s.set_icon(data_uri)),
            Err(e) => gloo::console::error!(format!("Icon upload failed: {}", e)),
        }
    });
}

/// スクリーンショット枠へのアップロード（枠ごとに独立）
pub fn upload_screenshot(state: RwSignal<PreviewState>, index: usize, ev: &web_sys::Event) {
    let Some(file) = selected_file(ev) else {
        return;
    };

    spawn_local(async move {
        match read_as_data_uri(file).await {
            Ok(data_uri) => state.update(|s| {
                // 読込中に横向きへ切り替えられた場合は枠が無い
                if let Err(e) = s.upload_screenshot(index, data_uri) {
                    gloo::console::error!(format!("Screenshot upload discarded: {}", e));
                }
            }),
            Err(e) => gloo::console::error!(format!("Screenshot upload failed: {}", e)),
        }
    });
}

pub fn remove_screenshot(state: RwSignal<PreviewState>, index: usize) {
    state.update(|s| {
        if let Err(e) = s.remove_screenshot(index) {
            gloo::console::error!(format!("Screenshot remove failed: {}", e));
        }
    });
}
