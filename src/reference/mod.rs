//! Hand-authored reference data: browse categories and station prefectures.
//!
//! The compiled-in tables are the defaults; a config file may replace either
//! one (see [`crate::config`]).

pub mod categories;
pub mod prefectures;

pub use categories::*;
pub use prefectures::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A browse category: a name, an optional icon and an ordered card list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cards: Vec<String>,
}

impl From<&CategoryTable> for CategoryDefinition {
    fn from(table: &CategoryTable) -> Self {
        Self {
            name: table.name.to_string(),
            icon: table.icon.map(|i| i.to_string()),
            cards: table.cards.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Reference tables handed to the engine at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub categories: Vec<CategoryDefinition>,
    pub prefectures: HashMap<String, String>,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
            prefectures: builtin_prefectures(),
        }
    }

    /// Reference data with no categories and no prefectures
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            categories: Vec::new(),
            prefectures: HashMap::new(),
        }
    }

    pub fn prefecture_of(&self, station: &str) -> Option<&str> {
        self.prefectures.get(station).map(|p| p.as_str())
    }
}

pub fn builtin_categories() -> Vec<CategoryDefinition> {
    ALL_CATEGORIES.iter().map(|c| CategoryDefinition::from(*c)).collect()
}

pub fn builtin_prefectures() -> HashMap<String, String> {
    STATION_PREFECTURES
        .iter()
        .map(|(station, prefecture)| (station.to_string(), prefecture.to_string()))
        .collect()
}
