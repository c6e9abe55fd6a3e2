//! Per-user persisted attribute bag.

use serde::{Deserialize, Serialize};

/// Per-user document persisted across turns and sessions.
///
/// `memos` is the one key this skill owns: an ordered sequence of memo texts,
/// insertion order = creation order, duplicates allowed. An absent key and an
/// empty sequence are equivalent. Every other key round-trips untouched
/// through `extra`, keeping the stored document opaque to the skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeBag {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memos: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_memos_key_reads_as_empty() {
        let bag: AttributeBag = serde_json::from_str("{}").unwrap();
        assert!(bag.memos.is_empty());
    }

    #[test]
    fn foreign_keys_survive_a_round_trip() {
        let bag: AttributeBag = serde_json::from_value(serde_json::json!({
            "memos": ["a"],
            "lastLocale": "en-US"
        }))
        .unwrap();
        let back = serde_json::to_value(&bag).unwrap();
        assert_eq!(back["memos"], serde_json::json!(["a"]));
        assert_eq!(back["lastLocale"], "en-US");
    }
}
