//! 自アプリのスクリーンショット枠（フォームとプレビューで共用）

use crate::app::{remove_screenshot, upload_screenshot};
use appstore_preview_common::PreviewState;
use leptos::prelude::*;

#[component]
pub fn ScreenshotSlotStrip(state: RwSignal<PreviewState>) -> impl IntoView {
    let slots = Memo::new(move |_| state.with(|s| s.screenshots().visible().to_vec()));

    view! {
        <div class="slot-strip">
            {move || {
                slots
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, slot)| slot_view(state, index, slot))
                    .collect_view()
            }}
        </div>
    }
}

fn slot_view(state: RwSignal<PreviewState>, index: usize, slot: Option<String>) -> impl IntoView {
    match slot {
        Some(src) => view! {
            <div class="slot filled">
                <img class="slot-image" src=src alt=format!("Screenshot{}", index + 1) />
                <button
                    type="button"
                    class="slot-remove"
                    on:click=move |_| remove_screenshot(state, index)
                >
                    "×"
                </button>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="slot">
                <label class="slot-upload">
                    <span>"＋"</span>
                    <input
                        type="file"
                        class="hidden"
                        accept="image/*"
                        on:change=move |ev| upload_screenshot(state, index, &ev)
                    />
                </label>
            </div>
        }
        .into_any(),
    }
}
