//! スクリーンショットの縦横判定と配置
//!
//! 画像列ごとに先頭1枚だけを計測し、その結果で配置を決める:
//! - Unmeasured: 先頭画像を非表示で読み込み中
//! - Measured(Landscape): 先頭1枚のみ、横幅いっぱい
//! - Measured(Portrait): 先頭3枚まで、高さ144固定で横スクロール
//!
//! 2枚目以降の向きが先頭と違っても補正しない。

/// 縦長表示時のタイルの高さ
pub const PORTRAIT_TILE_HEIGHT: f64 = 144.0;

/// 縦長表示時の最大枚数
pub const MAX_PORTRAIT_TILES: usize = 3;

/// 画像の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// 幅 > 高さなら横長、それ以外（正方形含む）は縦長
    pub fn classify(width: u32, height: u32) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// 画像列ごとの計測状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScreenshotLayout {
    #[default]
    Unmeasured,
    Measured {
        orientation: Orientation,
        aspect_ratio: f64,
    },
}

impl ScreenshotLayout {
    pub fn measured(width: u32, height: u32) -> Self {
        let aspect_ratio = if height == 0 {
            1.0
        } else {
            width as f64 / height as f64
        };
        ScreenshotLayout::Measured {
            orientation: Orientation::classify(width, height),
            aspect_ratio,
        }
    }

    /// 先頭画像の読み込み完了。計測は一度きりで、2回目以降は無視する
    pub fn measure(&mut self, width: u32, height: u32) -> bool {
        match self {
            ScreenshotLayout::Unmeasured => {
                *self = Self::measured(width, height);
                true
            }
            ScreenshotLayout::Measured { .. } => false,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self {
            ScreenshotLayout::Unmeasured => None,
            ScreenshotLayout::Measured { orientation, .. } => Some(*orientation),
        }
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        match self {
            ScreenshotLayout::Unmeasured => None,
            ScreenshotLayout::Measured { aspect_ratio, .. } => Some(*aspect_ratio),
        }
    }

    /// 計測のために非表示で読み込む画像
    pub fn probe<'a>(&self, urls: &'a [String]) -> Option<&'a str> {
        match self {
            ScreenshotLayout::Unmeasured => urls.first().map(String::as_str),
            ScreenshotLayout::Measured { .. } => None,
        }
    }

    /// 表示するタイル（未計測なら空）
    pub fn tiles(&self, urls: &[String]) -> Vec<ScreenshotTile> {
        let ScreenshotLayout::Measured { orientation, aspect_ratio } = *self else {
            return Vec::new();
        };

        match orientation {
            Orientation::Landscape => urls
                .first()
                .map(|url| ScreenshotTile {
                    index: 0,
                    url: url.clone(),
                    size: TileSize::FullWidth { aspect_ratio },
                })
                .into_iter()
                .collect(),
            Orientation::Portrait => urls
                .iter()
                .take(MAX_PORTRAIT_TILES)
                .enumerate()
                .map(|(index, url)| ScreenshotTile {
                    index,
                    url: url.clone(),
                    size: TileSize::FixedHeight {
                        height: PORTRAIT_TILE_HEIGHT,
                        width: PORTRAIT_TILE_HEIGHT * aspect_ratio,
                    },
                })
                .collect(),
        }
    }
}

/// 表示タイル
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotTile {
    pub index: usize,
    pub url: String,
    pub size: TileSize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TileSize {
    FullWidth { aspect_ratio: f64 },
    FixedHeight { height: f64, width: f64 },
}

impl TileSize {
    /// インラインCSS
    pub fn style(&self) -> String {
        match self {
            TileSize::FullWidth { aspect_ratio } => {
                format!("width: 100%; aspect-ratio: {:.4};", aspect_ratio)
            }
            TileSize::FixedHeight { height, width } => {
                format!("height: {:.0}px; width: {:.1}px;", height, width)
            }
        }
    }
}
