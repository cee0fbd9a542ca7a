use serde_json::Value;
use tracing::debug;

use crate::document::{CardDocument, PeriodTable, StationDocument};
use crate::error::DocumentError;

/// Parse a card document body.
///
/// Only a missing or non-array `stations` is fatal. Inside it, entries
/// without a usable station name are dropped and non-string or blank card
/// values are ignored, so older documents carrying just a flat `cards` list
/// load as period-less stations.
pub fn parse_document(text: &str) -> Result<CardDocument, DocumentError> {
    let json: Value = serde_json::from_str(text)?;

    let stations = json
        .get("stations")
        .and_then(|v| v.as_array())
        .ok_or(DocumentError::MissingStations)?;

    let stations = stations
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            let parsed = parse_station(entry);
            if parsed.is_none() {
                debug!(index = idx, "skipping station entry without a name");
            }
            parsed
        })
        .collect();

    Ok(CardDocument { stations })
}

fn parse_station(entry: &Value) -> Option<StationDocument> {
    let station = entry
        .get("station")
        .and_then(|v| v.as_str())
        .filter(|s| !s.trim().is_empty())?
        .to_string();

    let periods = entry.get("periods").and_then(|v| v.as_object()).map(|obj| {
        obj.iter()
            .map(|(label, cards)| (label.clone(), extract_cards(cards)))
            .filter(|(_, cards)| !cards.is_empty())
            .collect::<PeriodTable>()
    });

    let cards = entry.get("cards").map(extract_cards);

    Some(StationDocument {
        station,
        periods,
        cards,
    })
}

fn extract_cards(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{StationEntry, StationShape};

    #[test]
    fn test_parse_mixed_station() {
        let doc = parse_document(
            r#"{"stations":[{"station":"東京","periods":{"1~49日目":["Bカード"]},"cards":["Aカード"]}]}"#,
        )
        .unwrap();

        assert_eq!(doc.stations.len(), 1);
        let station = &doc.stations[0];
        assert_eq!(station.station, "東京");
        assert_eq!(
            station.periods.as_ref().unwrap().get("1~49日目").unwrap(),
            &["Bカード".to_string()]
        );
        assert_eq!(station.cards.as_deref(), Some(&["Aカード".to_string()][..]));
    }

    #[test]
    fn test_period_key_order_is_preserved() {
        let doc = parse_document(
            r#"{"stations":[{"station":"東京","periods":{"50~99日目":["B"],"1~49日目":["A"]}}]}"#,
        )
        .unwrap();
        let labels: Vec<_> = doc.stations[0].periods.as_ref().unwrap().labels().collect();
        assert_eq!(labels, vec!["50~99日目", "1~49日目"]);
    }

    #[test]
    fn test_legacy_flat_cards_shape() {
        let doc = parse_document(r#"{"stations":[{"station":"大阪","cards":["Aカード"]}]}"#).unwrap();
        let (_, entry) = doc.stations[0].clone().into_entry();
        assert_eq!(entry, StationEntry::Cards(vec!["Aカード".to_string()]));
    }

    #[test]
    fn test_lenient_card_values() {
        let doc = parse_document(
            r#"{"stations":[{"station":"大阪","cards":["Aカード", 3, null, ""],"periods":{"1日目":[false]}}]}"#,
        )
        .unwrap();
        let (_, entry) = doc.stations[0].clone().into_entry();
        assert_eq!(entry.shape(), StationShape::Cards);
    }

    #[test]
    fn test_entries_without_station_are_skipped() {
        let doc = parse_document(
            r#"{"stations":[{"cards":["A"]},{"station":"  ","cards":["A"]},"junk",{"station":"京都"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.stations.len(), 1);
        assert_eq!(doc.stations[0].station, "京都");
    }

    #[test]
    fn test_malformed_documents() {
        assert!(matches!(parse_document("not json"), Err(DocumentError::InvalidJson(_))));
        assert!(matches!(
            parse_document(r#"{"stations":{}}"#),
            Err(DocumentError::MissingStations)
        ));
        assert!(matches!(
            parse_document(r#"{"other":[]}"#),
            Err(DocumentError::MissingStations)
        ));
        assert!(matches!(parse_document(r#"[]"#), Err(DocumentError::MissingStations)));
    }
}
