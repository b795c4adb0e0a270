//! ローカル画像の読み込み
//!
//! - Data URI化（ブラウザのFileReader.readAsDataURL相当）
//! - 先頭画像の計測によるスクリーンショット配置判定

use crate::error::{PreviewError, Result};
use appstore_preview_common::{encode_data_uri, ScreenshotLayout, ScreenshotTile};
use std::path::{Path, PathBuf};

const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// 画像ファイルをData URIとして読み込む（変換・検証はしない）
pub fn load_image_as_data_uri(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(PreviewError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let mime_type = image::guess_format(&bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME_TYPE);

    Ok(encode_data_uri(mime_type, &bytes))
}

/// 画像の実サイズ（幅, 高さ）
pub fn measure_image(path: &Path) -> Result<(u32, u32)> {
    if !path.is_file() {
        return Err(PreviewError::FileNotFound(path.display().to_string()));
    }
    image::image_dimensions(path)
        .map_err(|e| PreviewError::ImageLoad(format!("{}: {}", path.display(), e)))
}

/// 画像列の配置を決める。計測するのは先頭1枚のみ
pub fn plan_layout(paths: &[PathBuf]) -> Result<(ScreenshotLayout, Vec<ScreenshotTile>)> {
    let first = paths.first().ok_or(PreviewError::NoImages)?;
    let (width, height) = measure_image(first)?;

    let mut layout = ScreenshotLayout::Unmeasured;
    layout.measure(width, height);

    let urls: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    let tiles = layout.tiles(&urls);
    Ok((layout, tiles))
}
