//! 検索結果エリア
//!
//! 表示は PreviewState::view() の結果だけで切り替える。

use crate::components::{app_summary::AppSummary, screenshot_display::ScreenshotDisplay};
use appstore_preview_common::{App, PreviewState, PreviewView};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(state: RwSignal<PreviewState>) -> impl IntoView {
    let current = Memo::new(move |_| state.with(|s| s.view()));

    move || match current.get() {
        PreviewView::Idle => message_view("競合アプリを検索してください").into_any(),
        PreviewView::Loading => message_view("検索中...").into_any(),
        PreviewView::NoResults => message_view("検索結果がありません").into_any(),
        PreviewView::Failed(detail) => view! {
            <div class="panel-message failed">
                <p>"検索に失敗しました"</p>
                <p class="failure-detail">{detail}</p>
            </div>
        }
        .into_any(),
        PreviewView::Results => view! {
            <div class="result-list">
                <For
                    each=move || state.with(|s| s.results().to_vec())
                    key=|app| app.track_id
                    children=move |app: App| result_item(state, app)
                />
            </div>
        }
        .into_any(),
        PreviewView::Detail(app) => detail_view(state, app).into_any(),
    }
}

fn message_view(text: &'static str) -> impl IntoView {
    view! { <div class="panel-message">{text}</div> }
}

fn result_item(state: RwSignal<PreviewState>, app: App) -> impl IntoView {
    let track_id = app.track_id;
    let urls = app.screenshot_urls.clone();
    let select = Callback::new(move |()| {
        state.update(|s| {
            s.select(track_id);
        });
    });

    view! {
        <div class="result-item">
            <div class="result-summary" on:click=move |_| select.run(())>
                <AppSummary app=app />
            </div>
            <ScreenshotDisplay urls=urls on_image_click=select />
            <div class="separator"></div>
        </div>
    }
}

fn detail_view(state: RwSignal<PreviewState>, app: App) -> impl IntoView {
    let urls = app.screenshot_urls.clone();
    let noop = Callback::new(|()| {});

    view! {
        <div class="detail">
            <AppSummary app=app />
            <ScreenshotDisplay urls=urls on_image_click=noop />
            <button type="button" class="back-button" on:click=move |_| state.update(|s| s.back())>
                "← 検索結果に戻る"
            </button>
        </div>
    }
}
