use serde::Serialize;
use std::collections::HashSet;

use crate::collate::JaCollator;
use crate::document::{PeriodTable, StationDocument, StationEntry, StationShape};
use crate::normalize::normalise;
use crate::period::{compare_entries, PeriodClass, PeriodKey, NO_PERIOD_LABEL};
use crate::reference::ReferenceData;

/// One period of a station and the cards obtainable during it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodBlock {
    pub name: String,
    pub cards: Vec<String>,
    /// Synthetic bucket for cards listed without a period
    pub is_no_period: bool,
}

impl PeriodBlock {
    pub fn new(name: impl Into<String>, cards: Vec<String>) -> Self {
        Self {
            name: name.into(),
            cards,
            is_no_period: false,
        }
    }

    pub fn no_period(cards: Vec<String>) -> Self {
        Self {
            name: NO_PERIOD_LABEL.to_string(),
            cards,
            is_no_period: true,
        }
    }

    pub fn key(&self) -> PeriodKey {
        if self.is_no_period {
            PeriodKey::Unnumbered
        } else {
            PeriodKey::of(&self.name)
        }
    }

    pub fn class(&self) -> PeriodClass {
        PeriodClass::classify(&self.name, self.is_no_period)
    }
}

/// Order blocks by period key, no-period bucket last
pub fn sort_periods(blocks: &mut [PeriodBlock], collator: &JaCollator) {
    blocks.sort_by(|a, b| {
        compare_entries((a.name.as_str(), a.is_no_period), (b.name.as_str(), b.is_no_period), collator)
    });
}

/// Query-time view of a station. Built once from its document entry and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRecord {
    pub station: String,
    pub prefecture: Option<String>,
    /// `station(prefecture)` when the prefecture is known
    pub display_name: String,
    pub shape: StationShape,
    /// Period blocks in display order. For a station carrying both periods
    /// and period-less cards the latter appear as a trailing no-period block.
    pub periods: Vec<PeriodBlock>,
    /// Cards listed without a period
    pub fallback: Vec<String>,
    /// Every distinct card at the station, collation-sorted
    pub card_list: Vec<String>,
    pub normalised_station: String,
    /// Parallel to `card_list`
    pub normalised_cards: Vec<String>,
}

impl StationRecord {
    /// True if the station name or any card contains `normalised_query`
    pub fn matches(&self, normalised_query: &str) -> bool {
        self.normalised_station.contains(normalised_query)
            || self
                .normalised_cards
                .iter()
                .any(|card| card.contains(normalised_query))
    }

    /// Period blocks that came from the document, without the synthetic one
    pub fn dated_periods(&self) -> impl Iterator<Item = &PeriodBlock> {
        self.periods.iter().filter(|p| !p.is_no_period)
    }
}

/// Build the query-time record for one station document
pub fn build_record(
    doc: StationDocument,
    reference: &ReferenceData,
    collator: &JaCollator,
) -> StationRecord {
    let (station, entry) = doc.into_entry();
    let shape = entry.shape();

    let (mut periods, fallback) = match entry {
        StationEntry::Periods(table) => (blocks_from(table), Vec::new()),
        StationEntry::Cards(cards) => (Vec::new(), cards),
        StationEntry::Mixed { periods, cards } => {
            let mut blocks = blocks_from(periods);
            blocks.push(PeriodBlock::no_period(cards.clone()));
            (blocks, cards)
        }
        StationEntry::Empty => (Vec::new(), Vec::new()),
    };
    sort_periods(&mut periods, collator);

    let card_list = union_cards(&periods, &fallback, collator);
    let normalised_cards = card_list.iter().map(|c| normalise(c)).collect();

    let prefecture = reference.prefecture_of(&station).map(|p| p.to_string());
    let display_name = match &prefecture {
        Some(prefecture) => format!("{}({})", station, prefecture),
        None => station.clone(),
    };

    StationRecord {
        normalised_station: normalise(&station),
        station,
        prefecture,
        display_name,
        shape,
        periods,
        fallback,
        card_list,
        normalised_cards,
    }
}

fn blocks_from(table: PeriodTable) -> Vec<PeriodBlock> {
    table
        .into_iter()
        .map(|(name, cards)| PeriodBlock::new(name, cards))
        .collect()
}

fn union_cards(periods: &[PeriodBlock], fallback: &[String], collator: &JaCollator) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cards: Vec<String> = periods
        .iter()
        .flat_map(|p| p.cards.iter())
        .chain(fallback.iter())
        .filter(|card| seen.insert(card.as_str()))
        .cloned()
        .collect();
    collator.sort(&mut cards);
    cards
}
