use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, warn};

use super::category::{eligible_categories, CategoryView};
use super::record::{build_record, StationRecord};
use crate::collate::JaCollator;
use crate::document::{CardDocument, StationShape};
use crate::error::LoadError;
use crate::normalize::normalise;
use crate::parser::parse_document;
use crate::period::{PeriodClass, NO_PERIOD_LABEL};
use crate::reference::{CategoryDefinition, ReferenceData};
use crate::source::{fetch_text, DataLocation};

pub const NO_QUERY_TEXT: &str = "ここに検索結果が表示されます";
pub const NO_MATCH_TEXT: &str = "該当するカードや駅が見つかりません";
pub const LOAD_FAILED_TEXT: &str = "データの読み込みに失敗しました。";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Ready,
    /// Loading failed; the engine runs with no records
    Failed(String),
}

/// A block of a search hit, narrowed to the cards relevant to the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitBlock {
    /// `None` for a station that lists its cards without any period
    pub period: Option<String>,
    pub is_no_period: bool,
    pub class: PeriodClass,
    pub cards: Vec<String>,
}

impl HitBlock {
    pub fn header(&self, display_name: &str) -> String {
        match &self.period {
            Some(period) => format!("{} ({})", display_name, period),
            None => display_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationHit {
    pub station: String,
    pub display_name: String,
    pub blocks: Vec<HitBlock>,
}

/// Immutable search engine over one loaded document
pub struct Engine {
    records: Vec<StationRecord>,
    card_names: Vec<String>,
    categories: Vec<CategoryDefinition>,
    state: LoadState,
}

impl Engine {
    /// Build records for every station, keeping document order
    pub fn from_document(doc: CardDocument, reference: &ReferenceData, collator: &JaCollator) -> Self {
        let records: Vec<StationRecord> = doc
            .stations
            .into_iter()
            .map(|station| build_record(station, reference, collator))
            .collect();

        let mut seen = HashSet::new();
        let mut card_names: Vec<String> = records
            .iter()
            .flat_map(|r| r.card_list.iter())
            .filter(|card| seen.insert(card.as_str()))
            .cloned()
            .collect();
        collator.sort(&mut card_names);

        Self {
            records,
            card_names,
            categories: reference.categories.clone(),
            state: LoadState::Ready,
        }
    }

    /// An engine with no records, e.g. after a failed load
    pub fn empty(reference: &ReferenceData, state: LoadState) -> Self {
        Self {
            records: Vec::new(),
            card_names: Vec::new(),
            categories: reference.categories.clone(),
            state,
        }
    }

    pub fn load(
        location: &DataLocation,
        reference: &ReferenceData,
        collator: &JaCollator,
    ) -> Result<Self, LoadError> {
        let text = fetch_text(location)?;
        let doc = parse_document(&text).map_err(|e| LoadError::MalformedDocument {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

        let engine = Self::from_document(doc, reference, collator);
        info!(
            location = %location,
            stations = engine.records.len(),
            cards = engine.card_names.len(),
            "document loaded"
        );
        Ok(engine)
    }

    /// Like [`Engine::load`], but a failure yields an empty engine whose
    /// state records the error.
    pub fn load_or_empty(
        location: &DataLocation,
        reference: &ReferenceData,
        collator: &JaCollator,
    ) -> Self {
        match Self::load(location, reference, collator) {
            Ok(engine) => engine,
            Err(e) => {
                warn!(error = %e, "load failed; continuing with no data");
                Self::empty(reference, LoadState::Failed(e.to_string()))
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Every distinct card in the dataset, collation-sorted
    pub fn card_names(&self) -> &[String] {
        &self.card_names
    }

    /// Stations whose name or any card contains the query, in document
    /// order. A blank query returns nothing.
    pub fn search(&self, query: &str) -> Vec<&StationRecord> {
        let query = normalise(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.records.iter().filter(|r| r.matches(&query)).collect()
    }

    /// Matching stations narrowed to what matched: every card when the
    /// station name matched, otherwise only the matching cards.
    pub fn search_hits(&self, query: &str) -> Vec<StationHit> {
        let query = normalise(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter_map(|record| narrow(record, &query))
            .collect()
    }

    /// Categories with at least one card present in the dataset
    pub fn categories(&self) -> Vec<CategoryView> {
        let present: HashSet<&str> = self.card_names.iter().map(|c| c.as_str()).collect();
        eligible_categories(&self.categories, &present)
    }

    /// Text to show instead of results, if any
    pub fn placeholder(&self, query: &str, result_count: usize) -> Option<&'static str> {
        if result_count > 0 {
            return None;
        }

        if !query.trim().is_empty() {
            Some(NO_MATCH_TEXT)
        } else if matches!(self.state, LoadState::Failed(_)) {
            Some(LOAD_FAILED_TEXT)
        } else {
            Some(NO_QUERY_TEXT)
        }
    }
}

fn narrow(record: &StationRecord, query: &str) -> Option<StationHit> {
    if record.shape == StationShape::Empty {
        return None;
    }

    let station_matches = record.normalised_station.contains(query);
    let matching: HashSet<&str> = record
        .card_list
        .iter()
        .zip(&record.normalised_cards)
        .filter(|(_, normalised)| normalised.contains(query))
        .map(|(card, _)| card.as_str())
        .collect();

    let relevant = |cards: &[String]| -> Vec<String> {
        cards
            .iter()
            .filter(|card| station_matches || matching.contains(card.as_str()))
            .cloned()
            .collect()
    };

    let mut blocks: Vec<HitBlock> = record
        .dated_periods()
        .filter_map(|period| {
            let cards = relevant(&period.cards);
            (!cards.is_empty()).then(|| HitBlock {
                period: Some(period.name.clone()),
                is_no_period: false,
                class: period.class(),
                cards,
            })
        })
        .collect();

    let fallback = relevant(&record.fallback);

    if blocks.is_empty() {
        if fallback.is_empty() {
            return None;
        }
        blocks.push(HitBlock {
            period: None,
            is_no_period: false,
            class: PeriodClass::Default,
            cards: fallback,
        });
    } else if !fallback.is_empty() {
        blocks.push(HitBlock {
            period: Some(NO_PERIOD_LABEL.to_string()),
            is_no_period: true,
            class: PeriodClass::Default,
            cards: fallback,
        });
    }

    Some(StationHit {
        station: record.station.clone(),
        display_name: record.display_name.clone(),
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{PeriodTable, StationDocument};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_document() -> CardDocument {
        let mut periods = PeriodTable::new();
        periods.push("1~49日目", strings(&["Bカード"]));
        periods.push("50~99日目", strings(&["Cカード", "Aカード"]));
        CardDocument {
            stations: vec![
                StationDocument {
                    station: "大阪".into(),
                    periods: None,
                    cards: Some(strings(&["Aカード"])),
                },
                StationDocument {
                    station: "東京".into(),
                    periods: Some(periods),
                    cards: Some(strings(&["Aカード"])),
                },
            ],
        }
    }

    fn engine() -> Engine {
        let collator = JaCollator::new().unwrap();
        Engine::from_document(sample_document(), &ReferenceData::builtin(), &collator)
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let engine = engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("  ").is_empty());
        assert!(engine.search_hits("").is_empty());
    }

    #[test]
    fn test_card_query_matches_in_document_order() {
        let engine = engine();
        let hits = engine.search("Aカード");
        let stations: Vec<_> = hits.iter().map(|r| r.station.as_str()).collect();
        assert_eq!(stations, vec!["大阪", "東京"]);
        assert!(hits.iter().all(|r| r.card_list.contains(&"Aカード".to_string())));
    }

    #[test]
    fn test_query_is_normalised() {
        let engine = engine();
        assert_eq!(engine.search("ａカード").len(), 2);
        assert_eq!(engine.search("  ｂ ").len(), 1);
    }

    #[test]
    fn test_station_query() {
        let engine = engine();
        let hits = engine.search("東京");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].display_name, "東京(東京都)");
    }

    #[test]
    fn test_no_match() {
        let engine = engine();
        assert!(engine.search("存在しない").is_empty());
        assert_eq!(engine.placeholder("存在しない", 0), Some(NO_MATCH_TEXT));
        assert_eq!(engine.placeholder("", 0), Some(NO_QUERY_TEXT));
        assert_eq!(engine.placeholder("東京", 1), None);
    }

    #[test]
    fn test_hits_narrow_to_matching_cards() {
        let engine = engine();
        let hits = engine.search_hits("Cカード");
        assert_eq!(hits.len(), 1);

        let tokyo = &hits[0];
        assert_eq!(tokyo.blocks.len(), 1);
        assert_eq!(tokyo.blocks[0].period.as_deref(), Some("50~99日目"));
        assert_eq!(tokyo.blocks[0].class, PeriodClass::Middle);
        assert_eq!(tokyo.blocks[0].cards, strings(&["Cカード"]));
        assert_eq!(tokyo.blocks[0].header(&tokyo.display_name), "東京(東京都) (50~99日目)");
    }

    #[test]
    fn test_hits_synthesize_no_period_block() {
        let engine = engine();
        let hits = engine.search_hits("Aカード");
        assert_eq!(hits.len(), 2);

        let osaka = &hits[0];
        assert_eq!(osaka.blocks.len(), 1);
        assert_eq!(osaka.blocks[0].period, None);
        assert_eq!(osaka.blocks[0].header(&osaka.display_name), "大阪(大阪府)");

        let tokyo = &hits[1];
        let periods: Vec<_> = tokyo.blocks.iter().map(|b| b.period.as_deref()).collect();
        assert_eq!(periods, vec![Some("50~99日目"), Some(NO_PERIOD_LABEL)]);
        assert!(tokyo.blocks[1].is_no_period);
        assert_eq!(tokyo.blocks[1].class, PeriodClass::Default);
    }

    #[test]
    fn test_station_match_keeps_every_card() {
        let engine = engine();
        let hits = engine.search_hits("東京");
        let blocks = &hits[0].blocks;
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].class, PeriodClass::Early);
        assert_eq!(blocks[1].cards, strings(&["Cカード", "Aカード"]));
        assert_eq!(blocks[2].period.as_deref(), Some(NO_PERIOD_LABEL));
    }

    #[test]
    fn test_card_names_and_categories() {
        let engine = engine();
        assert_eq!(engine.card_names(), strings(&["Aカード", "Bカード", "Cカード"]).as_slice());
        assert!(engine.categories().is_empty());

        let collator = JaCollator::new().unwrap();
        let mut reference = ReferenceData::builtin();
        reference.categories = vec![CategoryDefinition {
            name: "テスト".into(),
            icon: None,
            cards: strings(&["Aカード", "Zカード"]),
        }];
        let engine = Engine::from_document(sample_document(), &reference, &collator);
        let categories = engine.categories();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].cards, strings(&["Aカード"]));
    }

    #[test]
    fn test_empty_station_matches_but_has_no_hit() {
        let collator = JaCollator::new().unwrap();
        let doc = CardDocument {
            stations: vec![StationDocument {
                station: "京都".into(),
                periods: Some(PeriodTable::new()),
                cards: None,
            }],
        };
        let engine = Engine::from_document(doc, &ReferenceData::builtin(), &collator);
        assert_eq!(engine.search("京都").len(), 1);
        assert!(engine.search_hits("京都").is_empty());
    }

    #[test]
    fn test_hits_match_width_folded_cards() {
        let collator = JaCollator::new().unwrap();
        let doc = CardDocument {
            stations: vec![StationDocument {
                station: "博多".into(),
                periods: None,
                cards: Some(strings(&["ｻﾐｯﾄカード", "Aカード"])),
            }],
        };
        let engine = Engine::from_document(doc, &ReferenceData::builtin(), &collator);
        let hits = engine.search_hits("サミット");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].blocks[0].cards, strings(&["ｻﾐｯﾄカード"]));
    }

    #[test]
    fn test_failed_engine_is_still_usable() {
        let engine = Engine::empty(&ReferenceData::builtin(), LoadState::Failed("boom".into()));
        assert!(engine.search("Aカード").is_empty());
        assert!(engine.categories().is_empty());
        assert_eq!(engine.placeholder("", 0), Some(LOAD_FAILED_TEXT));
    }
}
