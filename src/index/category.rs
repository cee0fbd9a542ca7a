use serde::Serialize;
use std::collections::HashSet;

use crate::reference::CategoryDefinition;

/// A category as shown to the user: only the cards present in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub cards: Vec<String>,
}

/// Intersect each category with the cards present in the dataset.
///
/// Categories with no present card are left out; the remaining cards keep
/// the category's declared order.
pub fn eligible_categories(
    definitions: &[CategoryDefinition],
    present: &HashSet<&str>,
) -> Vec<CategoryView> {
    definitions
        .iter()
        .filter_map(|def| {
            let cards: Vec<String> = def
                .cards
                .iter()
                .filter(|card| present.contains(card.as_str()))
                .cloned()
                .collect();

            if cards.is_empty() {
                None
            } else {
                Some(CategoryView {
                    name: def.name.clone(),
                    icon: def.icon.clone(),
                    cards,
                })
            }
        })
        .collect()
}
