//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Slot out of range: {index} (capacity {capacity})")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
