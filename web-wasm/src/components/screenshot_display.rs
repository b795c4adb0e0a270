//! 競合アプリのスクリーンショット表示
//!
//! 先頭画像だけを非表示で読み込んで縦横を判定し、その後に配置する。
//! 判定はこのコンポーネント（＝画像列）ごとに行い、アプリ間で使い回さない。

use appstore_preview_common::{Orientation, ScreenshotLayout, ScreenshotTile};
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

#[component]
pub fn ScreenshotDisplay(urls: Vec<String>, on_image_click: Callback<()>) -> impl IntoView {
    let (layout, set_layout) = signal(ScreenshotLayout::Unmeasured);

    move || {
        let current = layout.get();

        if let Some(src) = current.probe(&urls) {
            let src = src.to_string();
            return view! {
                <img
                    class="hidden"
                    src=src
                    alt=""
                    on:load=move |ev| {
                        let image = ev
                            .target()
                            .and_then(|t| t.dyn_into::<HtmlImageElement>().ok());
                        if let Some(image) = image {
                            set_layout.update(|l| {
                                l.measure(image.natural_width(), image.natural_height());
                            });
                        }
                    }
                />
            }
            .into_any();
        }

        let tiles = current.tiles(&urls);
        match current.orientation() {
            Some(Orientation::Landscape) => view! {
                <div class="screenshot-landscape">
                    {tiles
                        .into_iter()
                        .map(|tile| tile_view(tile, "screenshot landscape", on_image_click))
                        .collect_view()}
                </div>
            }
            .into_any(),
            Some(Orientation::Portrait) => view! {
                <div class="screenshot-strip">
                    {tiles
                        .into_iter()
                        .map(|tile| tile_view(tile, "screenshot portrait", on_image_click))
                        .collect_view()}
                </div>
            }
            .into_any(),
            // 画像が1枚も無い
            None => view! { <div class="screenshot-strip empty"></div> }.into_any(),
        }
    }
}

fn tile_view(tile: ScreenshotTile, class: &'static str, on_click: Callback<()>) -> impl IntoView {
    let alt = format!("Screenshot {}", tile.index + 1);
    view! {
        <img
            class=class
            src=tile.url
            alt=alt
            style=tile.size.style()
            on:click=move |_| on_click.run(())
        />
    }
}
