//! Period labels: ordering keys and visual classification.

use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::LazyLock;

use crate::collate::JaCollator;

/// Label of the synthetic bucket holding cards without a period
pub const NO_PERIOD_LABEL: &str = "期間情報なし";

static RE_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Numeric sort key of a period label: the first run of ASCII digits.
/// Labels without digits sort after every numbered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodKey {
    Numbered(u64),
    Unnumbered,
}

impl PeriodKey {
    pub fn of(label: &str) -> Self {
        match RE_DIGITS.find(label) {
            // Overlong digit runs saturate rather than fall into the unnumbered bucket
            Some(m) => PeriodKey::Numbered(m.as_str().parse().unwrap_or(u64::MAX)),
            None => PeriodKey::Unnumbered,
        }
    }
}

/// Order two period labels: numeric key first, collation on the full label
/// for ties.
pub fn compare_labels(a: &str, b: &str, collator: &JaCollator) -> Ordering {
    PeriodKey::of(a)
        .cmp(&PeriodKey::of(b))
        .then_with(|| collator.compare(a, b))
}

/// Like [`compare_labels`], but a no-period entry always sorts last
/// whatever digits its label happens to contain.
pub fn compare_entries(
    a: (&str, bool),
    b: (&str, bool),
    collator: &JaCollator,
) -> Ordering {
    let (a_label, a_no_period) = a;
    let (b_label, b_no_period) = b;
    let a_key = if a_no_period { PeriodKey::Unnumbered } else { PeriodKey::of(a_label) };
    let b_key = if b_no_period { PeriodKey::Unnumbered } else { PeriodKey::of(b_label) };

    a_no_period
        .cmp(&b_no_period)
        .then_with(|| a_key.cmp(&b_key))
        .then_with(|| collator.compare(a_label, b_label))
}

/// Visual bucket of a period block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PeriodClass {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "1_49")]
    Early,
    #[serde(rename = "50")]
    Middle,
    #[serde(rename = "100")]
    Late,
}

impl PeriodClass {
    pub fn classify(label: &str, is_no_period: bool) -> Self {
        if is_no_period {
            return PeriodClass::Default;
        }

        match PeriodKey::of(label) {
            PeriodKey::Numbered(n) if n <= 49 => PeriodClass::Early,
            PeriodKey::Numbered(n) if n < 100 => PeriodClass::Middle,
            PeriodKey::Numbered(_) => PeriodClass::Late,
            PeriodKey::Unnumbered => PeriodClass::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PeriodClass::Default => "default",
            PeriodClass::Early => "1_49",
            PeriodClass::Middle => "50",
            PeriodClass::Late => "100",
        }
    }
}

impl std::fmt::Display for PeriodClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
