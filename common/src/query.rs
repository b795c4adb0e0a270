//! iTunes Search APIへの固定クエリ
//!
//! 検索語以外のパラメータはすべて固定。

pub const COUNTRY: &str = "jp";
pub const MEDIA: &str = "software";
pub const ENTITY: &str = "software";
pub const LIMIT: u32 = 10;
pub const ATTRIBUTES: &str = "developerName,description,screenshotUrls,artworkUrl512,trackName,sellerName,averageUserRating,userRatingCount,price,subtitle";

/// 検索クエリ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// 空文字の検索語はNone（上流へは送らない）
    pub fn new(term: impl Into<String>) -> Option<Self> {
        let term = term.into();
        if term.is_empty() {
            None
        } else {
            Some(Self { term })
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// クエリパラメータ（順序固定）
    pub fn pairs(&self) -> [(&'static str, String); 6] {
        [
            ("term", self.term.clone()),
            ("country", COUNTRY.to_string()),
            ("media", MEDIA.to_string()),
            ("entity", ENTITY.to_string()),
            ("limit", LIMIT.to_string()),
            ("attributes", ATTRIBUTES.to_string()),
        ]
    }
}
