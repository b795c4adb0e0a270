//! App Store Preview Common Library
//!
//! プロキシサーバーとWeb(WASM)で共有される型と状態管理

pub mod types;
pub mod query;
pub mod error;
pub mod data_uri;
pub mod layout;
pub mod slots;
pub mod preview;
pub mod format;

pub use types::{App, SearchResultSet};
pub use query::{SearchQuery, ATTRIBUTES, COUNTRY, ENTITY, LIMIT, MEDIA};
pub use error::{Error, Result};
pub use data_uri::{encode_data_uri, DataUri};
pub use layout::{Orientation, ScreenshotLayout, ScreenshotTile, TileSize};
pub use slots::{ScreenshotSlots, SlotOrientation};
pub use preview::{PreviewState, PreviewView, SearchTicket};
pub use format::{format_count, rating_label};
