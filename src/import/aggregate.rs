use std::collections::{HashMap, HashSet};

use crate::collate::JaCollator;
use crate::document::{CardDocument, PeriodTable, StationDocument};
use crate::period::compare_labels;

/// One data line of the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub station: String,
    /// `None` when the period column was blank
    pub period: Option<String>,
    pub card: String,
}

impl SourceRow {
    /// Build a row from parsed fields. Rows with fewer than three fields or a
    /// blank station or card are rejected.
    pub fn from_fields(fields: &[String]) -> Option<Self> {
        if fields.len() < 3 {
            return None;
        }

        let station = fields[0].trim();
        let card = fields[2].trim();
        if station.is_empty() || card.is_empty() {
            return None;
        }

        let period = fields[1].trim();
        Some(Self {
            station: station.to_string(),
            period: (!period.is_empty()).then(|| period.to_string()),
            card: card.to_string(),
        })
    }
}

#[derive(Debug, Default)]
struct StationCards {
    periods: HashMap<String, HashSet<String>>,
    fallback: HashSet<String>,
}

/// Groups rows by station, then by period, deduplicating card names
#[derive(Debug, Default)]
pub struct Aggregator {
    stations: HashMap<String, StationCards>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: SourceRow) {
        let entry = self.stations.entry(row.station).or_default();
        match row.period {
            Some(period) => {
                entry.periods.entry(period).or_default().insert(row.card);
            }
            None => {
                entry.fallback.insert(row.card);
            }
        }
    }

    /// Produce the document: stations and cards in collation order, periods
    /// in period order.
    pub fn finish(self, collator: &JaCollator) -> CardDocument {
        let mut stations: Vec<StationDocument> = self
            .stations
            .into_iter()
            .map(|(station, cards)| build_station(station, cards, collator))
            .collect();

        collator.sort_by_key(&mut stations, |s| s.station.as_str());

        CardDocument { stations }
    }
}

fn build_station(station: String, cards: StationCards, collator: &JaCollator) -> StationDocument {
    let periods = if cards.periods.is_empty() {
        None
    } else {
        let mut entries: Vec<(String, Vec<String>)> = cards
            .periods
            .into_iter()
            .map(|(label, set)| (label, sorted(set, collator)))
            .collect();
        entries.sort_by(|a, b| compare_labels(&a.0, &b.0, collator));
        Some(entries.into_iter().collect::<PeriodTable>())
    };

    let cards = if cards.fallback.is_empty() {
        None
    } else {
        Some(sorted(cards.fallback, collator))
    };

    StationDocument {
        station,
        periods,
        cards,
    }
}

fn sorted(set: HashSet<String>, collator: &JaCollator) -> Vec<String> {
    let mut items: Vec<String> = set.into_iter().collect();
    collator.sort(&mut items);
    items
}
