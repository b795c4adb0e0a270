//! アイコン・アプリ名・評価の1行表示

use appstore_preview_common::{rating_label, App};
use leptos::prelude::*;

#[component]
pub fn AppSummary(app: App) -> impl IntoView {
    let rating = rating_label(&app);
    let App { track_name, artwork_url512, .. } = app;
    let alt = track_name.clone();

    view! {
        <div class="app-row">
            <img class="app-icon" src=artwork_url512 alt=alt />
            <div class="app-info">
                <h4 class="app-name">{track_name}</h4>
                <p class="app-rating">{rating}</p>
            </div>
        </div>
    }
}
