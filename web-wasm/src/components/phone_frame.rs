//! iPhone 風のフレーム
//!
//! 上段に自アプリ（アイコン・名前・スクリーンショット枠）、
//! その下に競合アプリの検索結果を表示する。

use crate::components::{results_panel::ResultsPanel, screenshot_slots::ScreenshotSlotStrip};
use appstore_preview_common::PreviewState;
use leptos::prelude::*;

#[component]
pub fn PhoneFrame(state: RwSignal<PreviewState>) -> impl IntoView {
    let icon = Memo::new(move |_| state.with(|s| s.icon().map(str::to_string)));

    view! {
        <div class="phone-wrapper">
            <div class="phone">
                <div class="phone-notch"></div>
                <div class="phone-island"></div>
                <div class="phone-screen">
                    <div class="own-app">
                        <div class="app-row">
                            {move || match icon.get() {
                                Some(src) => view! {
                                    <img class="app-icon" src=src alt="App Icon" />
                                }
                                .into_any(),
                                None => view! {
                                    <div class="app-icon placeholder">
                                        <span>"No Icon"</span>
                                    </div>
                                }
                                .into_any(),
                            }}
                            <div class="app-info">
                                <h4 class="app-name">
                                    {move || state.with(|s| s.display_name().to_string())}
                                </h4>
                                <p class="app-rating">"評価: -（-件）"</p>
                            </div>
                        </div>
                        <ScreenshotSlotStrip state=state />
                    </div>
                    <div class="phone-results">
                        <ResultsPanel state=state />
                    </div>
                </div>
            </div>
        </div>
    }
}
