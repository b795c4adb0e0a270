//! プレビュー画面の状態管理
//!
//! 画面の状態を1つの構造体にまとめ、遷移はすべてメソッドで行う。
//! 描画から独立しているのでブラウザなしでテストできる。
//!
//! 表示状態:
//! - Idle: まだ検索していない
//! - Loading: 検索中（一覧の代わりにローディング表示）
//! - Results: 検索結果一覧
//! - Detail: 選択したアプリの詳細
//! - NoResults: 検索したが0件
//! - Failed: 検索に失敗（0件とは区別して表示する）
//!
//! 検索は世代番号付きのチケットで管理し、古いリクエストの応答が
//! 後から届いても新しい結果を上書きしない。

use crate::error::Result;
use crate::slots::{ScreenshotSlots, SlotOrientation};
use crate::types::{App, SearchResultSet};

pub const APP_NAME_PLACEHOLDER: &str = "アプリ名";

/// 発行済みの検索リクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    term: String,
}

impl SearchTicket {
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// 結果エリアの表示状態
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewView {
    Idle,
    Loading,
    Results,
    NoResults,
    Failed(String),
    Detail(App),
}

/// プレビュー画面の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    app_name: String,
    icon: Option<String>,
    screenshots: ScreenshotSlots,
    search_term: String,
    results: Vec<App>,
    selected: Option<App>,
    has_searched: bool,
    generation: u64,
    in_flight: Option<u64>,
    last_error: Option<String>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- 自アプリ情報 ----

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// 未入力ならプレースホルダー
    pub fn display_name(&self) -> &str {
        if self.app_name.is_empty() {
            APP_NAME_PLACEHOLDER
        } else {
            &self.app_name
        }
    }

    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app_name = name.into();
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, data_uri: String) {
        self.icon = Some(data_uri);
    }

    pub fn clear_icon(&mut self) {
        self.icon = None;
    }

    pub fn screenshots(&self) -> &ScreenshotSlots {
        &self.screenshots
    }

    pub fn set_orientation(&mut self, orientation: SlotOrientation) {
        self.screenshots.set_orientation(orientation);
    }

    pub fn upload_screenshot(&mut self, index: usize, data_uri: String) -> Result<()> {
        self.screenshots.upload(index, data_uri)
    }

    pub fn remove_screenshot(&mut self, index: usize) -> Result<()> {
        self.screenshots.remove(index)
    }

    // ---- 検索 ----

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn results(&self) -> &[App] {
        &self.results
    }

    pub fn selected(&self) -> Option<&App> {
        self.selected.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// 検索開始。空白のみの検索語は無視してNone
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.search_term.trim().is_empty() {
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.has_searched = true;
        self.last_error = None;

        Some(SearchTicket {
            generation: self.generation,
            term: self.search_term.clone(),
        })
    }

    /// 検索完了。最新のチケット以外は無視してfalseを返す
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: std::result::Result<SearchResultSet, String>,
    ) -> bool {
        if self.in_flight != Some(ticket.generation) {
            return false;
        }

        self.in_flight = None;
        self.selected = None;

        match outcome {
            Ok(set) => {
                self.results = set.results;
                self.last_error = None;
            }
            Err(message) => {
                self.results.clear();
                self.last_error = Some(message);
            }
        }
        true
    }

    /// 結果一覧からアプリを選択
    pub fn select(&mut self, track_id: u64) -> bool {
        if self.is_loading() {
            return false;
        }
        match self.results.iter().find(|app| app.track_id == track_id) {
            Some(app) => {
                self.selected = Some(app.clone());
                true
            }
            None => false,
        }
    }

    /// 詳細から一覧へ戻る（結果はそのまま）
    pub fn back(&mut self) {
        self.selected = None;
    }

    pub fn view(&self) -> PreviewView {
        if self.is_loading() {
            return PreviewView::Loading;
        }
        if let Some(app) = &self.selected {
            return PreviewView::Detail(app.clone());
        }
        if !self.results.is_empty() {
            return PreviewView::Results;
        }
        if let Some(message) = &self.last_error {
            return PreviewView::Failed(message.clone());
        }
        if self.has_searched {
            PreviewView::NoResults
        } else {
            PreviewView::Idle
        }
    }
}
