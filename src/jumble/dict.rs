//! # The Jumble Dict
//!
//! A [`JumbleDict`] maps a signature (see [`crate::signature`]) to the words spelled
//! with exactly those letters:
//!
//! ```text
//! "aagnorrt" -> ["arrogant", "tarragon"]
//! "deirw"    -> ["weird", "wider", "wired"]
//! ```
//!
//! ## Invariants
//!
//! - No entry is ever empty. Removing the last word of an entry removes the entry.
//! - The editor never introduces a duplicate word into an entry.
//! - Word order inside an entry is insertion order. Building keeps the order of the
//!   word source; editing keeps existing words in place and appends new ones.
//!
//! Keys are kept in a `BTreeMap`, so the persisted JSON lists signatures sorted, which
//! keeps diffs of a checked-in dict small.
//!
//! ## Duplicates in a word source
//!
//! [`build_index`] does not deduplicate: a word listed twice in the source is listed
//! twice in its entry. Word lists are expected to be distinct already, and the editor
//! ([`edit_index`]) is where de-duplication is enforced.

use crate::error::{JumbleError, Result};
use crate::model::{EditRequest, EditStats};
use crate::signature::signature;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JumbleDict {
    entries: BTreeMap<String, Vec<String>>,
}

/// What happened to a single word passed to [`JumbleDict::remove_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// No entry exists for the word's signature
    NoEntry,
    /// The entry exists but does not contain the word
    NotFound,
    /// `count` occurrences were filtered out and the entry still has words
    Removed { count: usize },
    /// `count` occurrences were filtered out and the entry was deleted
    EntryDeleted { count: usize },
}

impl JumbleDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dict from a word sequence. See [`build_index`].
    pub fn build<I, W>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut dict = Self::new();
        let mut count = 0usize;

        for word in words {
            let word = word.into();
            dict.entries.entry(signature(&word)).or_default().push(word);
            count += 1;
        }

        if count == 0 {
            return Err(JumbleError::Input("Input word list is empty.".to_string()));
        }

        log::debug!("built {} keys from {} words", dict.len(), count);
        Ok(dict)
    }

    /// Adds `word` under its signature unless that exact word is already there.
    ///
    /// Returns `true` when the word was appended.
    pub fn add_word(&mut self, word: &str) -> bool {
        let entry = self.entries.entry(signature(word)).or_default();
        if entry.iter().any(|w| w == word) {
            log::debug!("skipping '{}': already present", word);
            return false;
        }
        entry.push(word.to_string());
        true
    }

    /// Filters every occurrence of `word` out of its entry, deleting the entry if it
    /// ends up empty. Unknown words are a no-op.
    pub fn remove_word(&mut self, word: &str) -> Removal {
        let key = signature(word);
        let Some(entry) = self.entries.get_mut(&key) else {
            log::debug!("not removing '{}': no entry for '{}'", word, key);
            return Removal::NoEntry;
        };

        let before = entry.len();
        entry.retain(|w| w != word);
        let count = before - entry.len();

        if count == 0 {
            return Removal::NotFound;
        }
        if entry.is_empty() {
            self.entries.remove(&key);
            return Removal::EntryDeleted { count };
        }
        Removal::Removed { count }
    }

    /// Applies all adds, then all removes. A word present in both lists ends up absent.
    pub fn apply<S: AsRef<str>>(
        &mut self,
        words_to_add: &[S],
        words_to_remove: &[S],
    ) -> EditStats {
        let mut stats = EditStats::default();

        for word in words_to_add {
            if self.add_word(word.as_ref()) {
                stats.added += 1;
            } else {
                stats.skipped += 1;
            }
        }

        for word in words_to_remove {
            match self.remove_word(word.as_ref()) {
                Removal::NoEntry | Removal::NotFound => {}
                Removal::Removed { count } => stats.removed += count,
                Removal::EntryDeleted { count } => {
                    stats.removed += count;
                    stats.entries_deleted += 1;
                }
            }
        }

        stats
    }

    pub fn apply_request(&mut self, request: &EditRequest) -> EditStats {
        self.apply(&request.words_to_add, &request.words_to_remove)
    }

    /// Words filed under `signature`.
    pub fn get(&self, signature: &str) -> Option<&[String]> {
        self.entries.get(signature).map(Vec::as_slice)
    }

    /// Every known anagram of `word`, including `word` itself if present.
    pub fn lookup(&self, word: &str) -> &[String] {
        self.get(&signature(word)).unwrap_or(&[])
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.lookup(word).iter().any(|w| w == word)
    }

    /// Number of signatures (keys).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words across all entries.
    pub fn word_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, words)| (key.as_str(), words.as_slice()))
    }
}

// Entries loaded from disk go through the same non-empty rule as edited ones.
impl<'de> Deserialize<'de> for JumbleDict {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut entries = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
        entries.retain(|key, words| {
            if words.is_empty() {
                log::warn!("dropping empty entry '{}'", key);
            }
            !words.is_empty()
        });
        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for JumbleDict
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        let mut entries = BTreeMap::new();
        for (key, words) in iter {
            let words: Vec<String> = words.into_iter().map(Into::into).collect();
            if !words.is_empty() {
                entries.insert(key.into(), words);
            }
        }
        Self { entries }
    }
}

/// Builds a fresh dict from `words`, grouping them by signature in input order.
///
/// Fails with [`JumbleError::Input`] when `words` is empty.
pub fn build_index<I, W>(words: I) -> Result<JumbleDict>
where
    I: IntoIterator<Item = W>,
    W: Into<String>,
{
    JumbleDict::build(words)
}

/// Adds `words_to_add` and then removes `words_to_remove`, in place.
///
/// Never fails: adding a present word and removing an absent one are both no-ops.
/// Returns the same dict for chaining.
pub fn edit_index<'a, S: AsRef<str>>(
    dict: &'a mut JumbleDict,
    words_to_add: &[S],
    words_to_remove: &[S],
) -> &'a mut JumbleDict {
    dict.apply(words_to_add, words_to_remove);
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    fn sample() -> JumbleDict {
        JumbleDict::from_iter([
            ("aagnorrt", vec!["arrogant", "tarragon"]),
            ("eerst", vec!["steer", "ester", "reset", "trees"]),
            ("deirw", vec!["weird", "wider", "wired"]),
        ])
    }

    #[test]
    fn build_groups_anagrams() {
        let dict = build_index([
            "arrogant", "steer", "weird", "ester", "wider", "tarragon", "reset", "wired",
            "trees",
        ])
        .unwrap();

        assert_eq!(dict, sample());
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.word_count(), 9);
    }

    #[test]
    fn build_keeps_input_order_within_entry() {
        let dict = build_index(["trees", "steer", "reset", "ester"]).unwrap();
        assert_eq!(
            dict.get("eerst").unwrap(),
            &["trees", "steer", "reset", "ester"]
        );
    }

    #[test]
    fn build_rejects_empty_input() {
        let err = build_index(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, JumbleError::Input(_)));
    }

    #[test]
    fn build_keeps_duplicate_words() {
        let dict = build_index(["weird", "weird", "wider"]).unwrap();
        assert_eq!(dict.get("deirw").unwrap(), &["weird", "weird", "wider"]);
    }

    #[test]
    fn build_accepts_empty_word() {
        let dict = build_index([""]).unwrap();
        assert_eq!(dict.get("").unwrap(), &[""]);
    }

    #[test]
    fn add_word_to_existing_entry() {
        let mut dict = JumbleDict::from_iter([("deirw", vec!["weird", "wider"])]);
        edit_index(&mut dict, &["wired"], NONE);
        assert_eq!(dict.get("deirw").unwrap(), &["weird", "wider", "wired"]);
    }

    #[test]
    fn add_creates_new_entry() {
        let mut dict = JumbleDict::from_iter([("eerst", vec!["steer"])]);
        edit_index(&mut dict, &["wired"], NONE);
        assert_eq!(dict.get("deirw").unwrap(), &["wired"]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn add_is_idempotent() {
        let mut dict = sample();
        let stats = dict.apply(&["wider", "steer"], NONE);
        assert_eq!(dict, sample());
        assert_eq!(stats.added, 0);
        assert_eq!(stats.skipped, 2);
    }

    #[test]
    fn add_same_word_twice_in_one_call_adds_once() {
        let mut dict = JumbleDict::new();
        let stats = dict.apply(&["wired", "wired"], NONE);
        assert_eq!(dict.get("deirw").unwrap(), &["wired"]);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn remove_single_word() {
        let mut dict = sample();
        edit_index(&mut dict, NONE, &["wired"]);
        assert_eq!(dict.get("deirw").unwrap(), &["weird", "wider"]);
    }

    #[test]
    fn remove_last_words_deletes_entry() {
        let mut dict = sample();
        let stats = dict.apply(NONE, &["weird", "wider", "wired"]);
        assert!(dict.get("deirw").is_none());
        assert_eq!(dict.len(), 2);
        assert_eq!(stats.removed, 3);
        assert_eq!(stats.entries_deleted, 1);
    }

    #[test]
    fn remove_filters_every_occurrence() {
        let mut dict = build_index(["weird", "wider", "weird"]).unwrap();
        assert_eq!(dict.remove_word("weird"), Removal::Removed { count: 2 });
        assert_eq!(dict.get("deirw").unwrap(), &["wider"]);
    }

    #[test]
    fn remove_absent_word_is_noop() {
        let mut dict = sample();
        assert_eq!(dict.remove_word("zebra"), Removal::NoEntry);
        // Same signature as "steer", but not in the entry
        assert_eq!(dict.remove_word("terse"), Removal::NotFound);
        assert_eq!(dict, sample());
    }

    #[test]
    fn add_then_remove_same_word_nets_to_absence() {
        let mut dict = JumbleDict::from_iter([("eerst", vec!["steer"])]);
        edit_index(&mut dict, &["wired"], &["wired"]);
        assert!(!dict.contains_word("wired"));
        assert!(dict.get("deirw").is_none());

        let mut dict = sample();
        edit_index(&mut dict, &["wired"], &["wired"]);
        assert_eq!(dict.get("deirw").unwrap(), &["weird", "wider"]);
    }

    #[test]
    fn edit_returns_same_dict_for_chaining() {
        let mut dict = JumbleDict::new();
        let len = edit_index(&mut dict, &["abacus"], NONE).len();
        assert_eq!(len, 1);
        assert_eq!(dict.lookup("abacus"), &["abacus"]);
    }

    #[test]
    fn apply_request_uses_both_lists() {
        let mut dict = sample();
        let request = EditRequest::new(
            vec!["admonition".into(), "domination".into()],
            vec!["domination".into(), "trees".into()],
        );
        let stats = dict.apply_request(&request);

        assert_eq!(dict.get("adiimnnoot").unwrap(), &["admonition"]);
        assert!(!dict.contains_word("trees"));
        assert_eq!(
            stats,
            EditStats {
                added: 2,
                skipped: 0,
                removed: 2,
                entries_deleted: 0
            }
        );
    }

    #[test]
    fn lookup_finds_anagrams() {
        let dict = sample();
        assert_eq!(dict.lookup("tarragon"), &["arrogant", "tarragon"]);
        assert_eq!(dict.lookup("wried"), &["weird", "wider", "wired"]);
        assert!(dict.lookup("zzz").is_empty());
        assert!(!dict.contains_word("wried"));
    }

    #[test]
    fn json_roundtrip_preserves_keys_and_order() {
        let dict = build_index(["wired", "weird", "wider", "trees", "steer"]).unwrap();
        let json = serde_json::to_string(&dict).unwrap();
        assert_eq!(
            json,
            r#"{"deirw":["wired","weird","wider"],"eerst":["trees","steer"]}"#
        );

        let parsed: JumbleDict = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dict);
    }

    #[test]
    fn deserialize_drops_empty_entries() {
        let dict: JumbleDict =
            serde_json::from_str(r#"{"deirw": [], "eerst": ["steer"]}"#).unwrap();
        assert_eq!(dict.len(), 1);
        assert!(dict.get("deirw").is_none());
    }

    #[test]
    fn iter_visits_entries_in_key_order() {
        let dict = sample();
        let keys: Vec<&str> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["aagnorrt", "deirw", "eerst"]);
    }
}
