//! 競合アプリ検索バー（iPhoneフレームの外）

use appstore_preview_common::PreviewState;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;

#[component]
pub fn SearchBar(state: RwSignal<PreviewState>, on_search: Callback<()>) -> impl IntoView {
    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <div class="card search-card">
            <h3>"競合アプリを検索"</h3>
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="アプリを検索..."
                    prop:value=move || state.with(|s| s.search_term().to_string())
                    on:input=move |ev| {
                        state.update(|s| s.set_search_term(event_target_value(&ev)));
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_search.run(());
                        }
                    }
                />
                <button
                    class="btn btn-primary"
                    disabled=is_loading
                    on:click=move |_| on_search.run(())
                >
                    {move || if is_loading() { "検索中..." } else { "検索" }}
                </button>
            </div>
        </div>
    }
}
