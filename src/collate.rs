//! Japanese-aware string ordering.
//!
//! Station names, card names and period labels are all ordered with the ICU
//! `ja` collation so kana and kanji land where a Japanese reader expects them.
//! Strings the collator considers equal fall back to code-point order, which
//! keeps every sort total and the import output byte-stable.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("ja collation data unavailable: {0}")]
pub struct CollationUnavailable(String);

pub struct JaCollator {
    inner: Collator,
}

impl JaCollator {
    pub fn new() -> Result<Self, CollationUnavailable> {
        let inner = Collator::try_new(&locale!("ja").into(), CollatorOptions::new())
            .map_err(|e| CollationUnavailable(format!("{:?}", e)))?;
        Ok(Self { inner })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.inner.compare(a, b).then_with(|| a.cmp(b))
    }

    /// Sort strings in place by collation order
    pub fn sort(&self, items: &mut [String]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    /// Sort arbitrary items by a string key
    pub fn sort_by_key<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> &str,
    {
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_station_order() {
        let collator = JaCollator::new().unwrap();
        assert_eq!(collator.compare("大阪", "東京"), Ordering::Less);
    }

    #[test]
    fn test_kana_order() {
        let collator = JaCollator::new().unwrap();
        let mut items = vec!["うどん".to_string(), "あさひ".to_string(), "いぶき".to_string()];
        collator.sort(&mut items);
        assert_eq!(items, vec!["あさひ", "いぶき", "うどん"]);
    }

    #[test]
    fn test_ties_fall_back_to_code_points() {
        let collator = JaCollator::new().unwrap();
        assert_eq!(collator.compare("Aカード", "Aカード"), Ordering::Equal);
        assert_eq!(collator.compare("Aカード", "Bカード"), Ordering::Less);
    }
}
