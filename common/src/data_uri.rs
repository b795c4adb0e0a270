//! Data URIの生成・分解
//!
//! アップロード画像はData URIとしてメモリ上に保持する。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::{Error, Result};

/// 分解済みData URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime_type: &'a str,
    pub base64_data: &'a str,
}

impl<'a> DataUri<'a> {
    /// "data:image/png;base64,iVBOR..." 形式を分解
    pub fn parse(uri: &'a str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidDataUri("missing data: prefix".to_string()))?;
        let (header, base64_data) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidDataUri("missing comma".to_string()))?;
        let mime_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::InvalidDataUri("not base64 encoded".to_string()))?;

        Ok(Self { mime_type, base64_data })
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.base64_data)
            .map_err(|e| Error::InvalidDataUri(e.to_string()))
    }
}

/// バイト列からData URIを生成
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
