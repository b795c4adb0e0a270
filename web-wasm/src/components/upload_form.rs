//! 自アプリ情報の入力フォーム

use crate::app::upload_icon;
use crate::components::{header::Header, screenshot_slots::ScreenshotSlotStrip};
use appstore_preview_common::{PreviewState, SlotOrientation};
use leptos::prelude::*;

#[component]
pub fn UploadForm(state: RwSignal<PreviewState>) -> impl IntoView {
    let icon = Memo::new(move |_| state.with(|s| s.icon().map(str::to_string)));

    view! {
        <div class="card form">
            <Header />

            <section class="form-section">
                <h2>"アプリ情報"</h2>
                <label class="field-label">"アプリ名"</label>
                <input
                    type="text"
                    class="text-input"
                    placeholder="アプリ名を入力"
                    prop:value=move || state.with(|s| s.app_name().to_string())
                    on:input=move |ev| state.update(|s| s.set_app_name(event_target_value(&ev)))
                />
            </section>

            <section class="form-section">
                <h2>"アプリアイコン (正方形)"</h2>
                <p class="hint">"1024 x 1024 推奨"</p>
                <div class="dropzone">
                    {move || match icon.get() {
                        Some(src) => view! {
                            <div class="icon-preview">
                                <img src=src alt="App Icon" />
                                <button
                                    type="button"
                                    class="secondary-button"
                                    on:click=move |_| state.update(|s| s.clear_icon())
                                >
                                    "削除"
                                </button>
                            </div>
                        }
                        .into_any(),
                        None => view! {
                            <label class="upload-button">
                                "アイコンをアップロード"
                                <input
                                    type="file"
                                    class="hidden"
                                    accept="image/*"
                                    on:change=move |ev| upload_icon(state, &ev)
                                />
                            </label>
                        }
                        .into_any(),
                    }}
                </div>
            </section>

            <section class="form-section">
                <h2>"スクリーンショット (縦または横)"</h2>
                <div class="orientation">
                    <span>"向き:"</span>
                    {orientation_radio(state, SlotOrientation::Portrait)}
                    {orientation_radio(state, SlotOrientation::Landscape)}
                </div>
                <p class="hint">"iPhone: 1290 x 2796px / iPad: 2048 x 2732px 推奨"</p>
                <div class="dropzone">
                    <ScreenshotSlotStrip state=state />
                </div>
            </section>
        </div>
    }
}

fn orientation_radio(state: RwSignal<PreviewState>, orientation: SlotOrientation) -> impl IntoView {
    view! {
        <label class="radio">
            <input
                type="radio"
                name="orientation"
                value=orientation.as_str()
                prop:checked=move || state.with(|s| s.screenshots().orientation() == orientation)
                on:change=move |_| state.update(|s| s.set_orientation(orientation))
            />
            <span>{orientation.label()}</span>
        </label>
    }
}
