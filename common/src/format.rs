//! 表示用フォーマット

use crate::types::App;

pub const NO_RATING_LABEL: &str = "評価なし";

/// 3桁区切り（12345 -> "12,345"）
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 評価表示（"★ 4.7（12,345件）" または "評価なし"）
pub fn rating_label(app: &App) -> String {
    match app.average_user_rating {
        Some(rating) if app.has_rating() => {
            format!("★ {:.1}（{}件）", rating, format_count(app.user_rating_count))
        }
        _ => NO_RATING_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_rating_label() {
        let app = App {
            average_user_rating: Some(4.72),
            user_rating_count: 12345,
            ..Default::default()
        };
        assert_eq!(rating_label(&app), "★ 4.7（12,345件）");
    }

    #[test]
    fn test_rating_label_absent() {
        let app = App::default();
        assert_eq!(rating_label(&app), "評価なし");
    }

    #[test]
    fn test_rating_label_zero_count() {
        let app = App {
            average_user_rating: Some(5.0),
            user_rating_count: 0,
            ..Default::default()
        };
        assert_eq!(rating_label(&app), "評価なし");
    }
}
