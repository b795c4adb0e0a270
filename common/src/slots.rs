//! 自アプリのスクリーンショット枠
//!
//! 縦向きは3枠、横向きは1枠。横向きへ切り替えると2・3枠目は破棄され、
//! 縦向きへ戻しても復元されない。

use crate::error::{Error, Result};

pub const SLOT_COUNT: usize = 3;

/// スクリーンショットの向き（ユーザー選択）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotOrientation {
    #[default]
    Portrait,
    Landscape,
}

impl SlotOrientation {
    pub fn capacity(&self) -> usize {
        match self {
            SlotOrientation::Portrait => SLOT_COUNT,
            SlotOrientation::Landscape => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotOrientation::Portrait => "portrait",
            SlotOrientation::Landscape => "landscape",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotOrientation::Portrait => "縦",
            SlotOrientation::Landscape => "横",
        }
    }
}

/// アップロード済みスクリーンショット（Data URI）の固定枠
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenshotSlots {
    orientation: SlotOrientation,
    slots: [Option<String>; SLOT_COUNT],
}

impl ScreenshotSlots {
    pub fn orientation(&self) -> SlotOrientation {
        self.orientation
    }

    pub fn capacity(&self) -> usize {
        self.orientation.capacity()
    }

    pub fn set_orientation(&mut self, orientation: SlotOrientation) {
        self.orientation = orientation;
        if orientation == SlotOrientation::Landscape {
            for slot in self.slots.iter_mut().skip(1) {
                *slot = None;
            }
        }
    }

    /// 枠に画像を入れる。読み込み中に向きが変わって枠が消えていればエラー
    pub fn upload(&mut self, index: usize, data_uri: String) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = Some(data_uri);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = None;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.visible().get(index)?.as_deref()
    }

    /// 現在の向きで表示する枠
    pub fn visible(&self) -> &[Option<String>] {
        &self.slots[..self.capacity()]
    }

    pub fn filled_count(&self) -> usize {
        self.visible().iter().filter(|s| s.is_some()).count()
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<String>> {
        let capacity = self.capacity();
        if index >= capacity {
            return Err(Error::SlotOutOfRange { index, capacity });
        }
        Ok(&mut self.slots[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ScreenshotSlots {
        let mut slots = ScreenshotSlots::default();
        slots.upload(0, "data:image/png;base64,AA==".to_string()).unwrap();
        slots.upload(1, "data:image/png;base64,AQ==".to_string()).unwrap();
        slots.upload(2, "data:image/png;base64,Ag==".to_string()).unwrap();
        slots
    }

    #[test]
    fn test_default_is_portrait_with_three_empty_slots() {
        let slots = ScreenshotSlots::default();
        assert_eq!(slots.orientation(), SlotOrientation::Portrait);
        assert_eq!(slots.visible().len(), 3);
        assert_eq!(slots.filled_count(), 0);
    }

    #[test]
    fn test_landscape_truncates_to_first_slot() {
        let mut slots = filled();
        slots.set_orientation(SlotOrientation::Landscape);

        assert_eq!(slots.visible().len(), 1);
        assert_eq!(slots.get(0), Some("data:image/png;base64,AA=="));
        assert_eq!(slots.filled_count(), 1);
    }

    #[test]
    fn test_back_to_portrait_does_not_restore() {
        let mut slots = filled();
        slots.set_orientation(SlotOrientation::Landscape);
        slots.set_orientation(SlotOrientation::Portrait);

        assert_eq!(slots.visible().len(), 3);
        assert_eq!(slots.get(0), Some("data:image/png;base64,AA=="));
        assert_eq!(slots.get(1), None);
        assert_eq!(slots.get(2), None);
    }

    #[test]
    fn test_landscape_with_empty_first_slot() {
        let mut slots = ScreenshotSlots::default();
        slots.upload(2, "data:image/png;base64,Ag==".to_string()).unwrap();
        slots.set_orientation(SlotOrientation::Landscape);
        assert_eq!(slots.filled_count(), 0);
    }

    #[test]
    fn test_upload_out_of_range_in_landscape() {
        let mut slots = ScreenshotSlots::default();
        slots.set_orientation(SlotOrientation::Landscape);

        let result = slots.upload(1, "data:image/png;base64,AQ==".to_string());
        assert!(matches!(
            result,
            Err(Error::SlotOutOfRange { index: 1, capacity: 1 })
        ));
    }

    #[test]
    fn test_remove_single_slot() {
        let mut slots = filled();
        slots.remove(1).unwrap();
        assert_eq!(slots.get(1), None);
        assert!(slots.get(0).is_some());
        assert!(slots.get(2).is_some());
    }

    #[test]
    fn test_replace_slot() {
        let mut slots = filled();
        slots.upload(0, "data:image/png;base64,Aw==".to_string()).unwrap();
        assert_eq!(slots.get(0), Some("data:image/png;base64,Aw=="));
    }
}
