use std::collections::BTreeMap;

use quiz_core::model::{CategoryId, HighScoreTable};

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Serialize the table as a flat JSON object of id to integer percentage.
pub(crate) fn encode_scores(table: &HighScoreTable) -> Result<String, StorageError> {
    serde_json::to_string(table).map_err(ser)
}

/// Decode a stored table.
///
/// Entries with a blank id or a value that is not a number are skipped;
/// numbers are handed to [`HighScoreTable::from_persisted`].
pub(crate) fn decode_scores(raw: &str) -> Result<HighScoreTable, StorageError> {
    let values: BTreeMap<String, serde_json::Value> = serde_json::from_str(raw).map_err(ser)?;
    let entries = values.into_iter().filter_map(|(key, value)| {
        let Ok(id) = CategoryId::new(key.as_str()) else {
            log::warn!("ignoring high score stored under blank id {key:?}");
            return None;
        };
        match value.as_f64() {
            Some(pct) => Some((id, pct)),
            None => {
                log::warn!("ignoring non-numeric high score for {id}: {value}");
                None
            }
        }
    });
    Ok(HighScoreTable::from_persisted(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_tolerates_odd_values() {
        let table = decode_scores(r#"{"fiqh":70,"sirah":"high","adab":99.6,"akhlak":250}"#)
            .unwrap();
        assert_eq!(table.best(&CategoryId::new("fiqh").unwrap()), Some(70));
        assert_eq!(table.best(&CategoryId::new("sirah").unwrap()), None);
        assert_eq!(table.best(&CategoryId::new("adab").unwrap()), Some(100));
        assert_eq!(table.best(&CategoryId::new("akhlak").unwrap()), Some(100));
    }

    #[test]
    fn decode_skips_blank_ids_and_negative_values() {
        let table = decode_scores(r#"{"  ":90,"fiqh":-5,"sirah":40}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.best(&CategoryId::new("sirah").unwrap()), Some(40));
        assert_eq!(table.best(&CategoryId::new("fiqh").unwrap()), None);
    }

    #[test]
    fn decode_rejects_non_object() {
        assert!(matches!(
            decode_scores("[1,2,3]"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn encode_then_decode_keeps_entries() {
        let mut table = HighScoreTable::new();
        table.record(&CategoryId::new("fiqh").unwrap(), 85);
        table.record(&CategoryId::new("sirah").unwrap(), 40);
        let decoded = decode_scores(&encode_scores(&table).unwrap()).unwrap();
        assert_eq!(decoded, table);
    }
}
