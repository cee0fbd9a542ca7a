//! The persisted card document and its per-station entries.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Top-level document: `{ "stations": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardDocument {
    pub stations: Vec<StationDocument>,
}

impl CardDocument {
    /// Flatten back into `(station, period, card)` rows, an empty period
    /// meaning "no period".
    pub fn to_rows(&self) -> Vec<(String, String, String)> {
        let mut rows = Vec::new();
        for station in &self.stations {
            if let Some(periods) = &station.periods {
                for (label, cards) in periods.iter() {
                    for card in cards {
                        rows.push((station.station.clone(), label.clone(), card.clone()));
                    }
                }
            }
            for card in station.cards.iter().flatten() {
                rows.push((station.station.clone(), String::new(), card.clone()));
            }
        }
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationDocument {
    pub station: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periods: Option<PeriodTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<String>>,
}

impl StationDocument {
    /// Classify what the station carries. Empty tables and lists count as
    /// absent.
    pub fn into_entry(self) -> (String, StationEntry) {
        let periods = self.periods.filter(|p| !p.is_empty());
        let cards = self.cards.filter(|c| !c.is_empty());

        let entry = match (periods, cards) {
            (Some(periods), Some(cards)) => StationEntry::Mixed { periods, cards },
            (Some(periods), None) => StationEntry::Periods(periods),
            (None, Some(cards)) => StationEntry::Cards(cards),
            (None, None) => StationEntry::Empty,
        };

        (self.station, entry)
    }
}

/// What a station entry holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationEntry {
    Periods(PeriodTable),
    Cards(Vec<String>),
    Mixed {
        periods: PeriodTable,
        cards: Vec<String>,
    },
    Empty,
}

/// Coarse shape of a station, kept on the built record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationShape {
    Periods,
    Cards,
    Mixed,
    Empty,
}

impl StationEntry {
    pub fn shape(&self) -> StationShape {
        match self {
            StationEntry::Periods(_) => StationShape::Periods,
            StationEntry::Cards(_) => StationShape::Cards,
            StationEntry::Mixed { .. } => StationShape::Mixed,
            StationEntry::Empty => StationShape::Empty,
        }
    }
}

/// Period label -> cards, serialized as a JSON object whose keys keep
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodTable(Vec<(String, Vec<String>)>);

impl PeriodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append cards under `label`, merging into an existing entry
    pub fn push(&mut self, label: impl Into<String>, cards: Vec<String>) {
        let label = label.into();
        match self.0.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => {
                for card in cards {
                    if !existing.contains(&card) {
                        existing.push(card);
                    }
                }
            }
            None => self.0.push((label, cards)),
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, label: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, cards)| cards.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter().map(|(label, cards)| (label, cards))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for PeriodTable {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Vec<String>)> for PeriodTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut table = PeriodTable::new();
        for (label, cards) in iter {
            table.push(label, cards);
        }
        table
    }
}

impl Serialize for PeriodTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, cards) in &self.0 {
            map.serialize_entry(label, cards)?;
        }
        map.end()
    }
}
