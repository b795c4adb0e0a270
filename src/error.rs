use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像が指定されていません")]
    NoImages,

    #[error("検索語が指定されていません")]
    EmptyTerm,

    #[error("Failed to fetch from App Store API: {0}")]
    UpstreamStatus(u16),

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] appstore_preview_common::Error),
}

pub type Result<T> = std::result::Result<T, PreviewError>;
