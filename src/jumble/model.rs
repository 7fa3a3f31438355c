use serde::{Deserialize, Serialize};

/// Words to add to and remove from an existing jumble dict.
///
/// Persisted as a JSON object with two optional keys:
///
/// ```json
/// { "words_to_add": ["wired"], "words_to_remove": ["domination"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRequest {
    #[serde(default)]
    pub words_to_add: Vec<String>,

    #[serde(default)]
    pub words_to_remove: Vec<String>,
}

impl EditRequest {
    pub fn new(words_to_add: Vec<String>, words_to_remove: Vec<String>) -> Self {
        Self {
            words_to_add,
            words_to_remove,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words_to_add.is_empty() && self.words_to_remove.is_empty()
    }
}

/// Counts reported after building a dict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub words: usize,
    pub keys: usize,
}

/// Counts reported after editing a dict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditStats {
    /// Words appended to an entry (new or existing)
    pub added: usize,
    /// Words to add that were already present
    pub skipped: usize,
    /// Word occurrences filtered out of entries
    pub removed: usize,
    /// Entries deleted because their last word was removed
    pub entries_deleted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_request_keys_are_optional() {
        let req: EditRequest = serde_json::from_str(r#"{"words_to_add": ["wired"]}"#).unwrap();
        assert_eq!(req.words_to_add, vec!["wired"]);
        assert!(req.words_to_remove.is_empty());

        let req: EditRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn edit_request_ignores_unknown_keys() {
        let req: EditRequest =
            serde_json::from_str(r#"{"words_to_remove": ["wider"], "note": "typo"}"#).unwrap();
        assert_eq!(req.words_to_remove, vec!["wider"]);
    }

    #[test]
    fn edit_request_rejects_non_string_words() {
        let req: Result<EditRequest, _> = serde_json::from_str(r#"{"words_to_add": [1, 2]}"#);
        assert!(req.is_err());
    }
}
