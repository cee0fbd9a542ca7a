use unicode_normalization::UnicodeNormalization;

/// Fold text for substring matching: trim, NFKC (full-width/half-width and
/// compatibility forms), then lowercase.
pub fn normalise(text: &str) -> String {
    text.trim().nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_full_width_and_case() {
        assert_eq!(normalise("  Ａカード "), "aカード");
        assert_eq!(normalise("ＡＢＣ"), "abc");
        assert_eq!(normalise("ｶｰﾄﾞ"), "カード");
    }

    #[test]
    fn keeps_kanji_and_kana() {
        assert_eq!(normalise("東京"), "東京");
        assert_eq!(normalise("ぶっとび周遊カード"), "ぶっとび周遊カード");
    }

    #[test]
    fn blank_folds_to_empty() {
        assert_eq!(normalise("   "), "");
        assert_eq!(normalise("\u{3000}"), "");
    }
}
