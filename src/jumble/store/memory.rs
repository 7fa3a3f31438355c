use super::{parse_word_list, serialize_dict, DictStore};
use crate::dict::JumbleDict;
use crate::error::{JumbleError, Result};
use crate::model::EditRequest;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
///
/// Holds "files" as a path-to-text map so the word-list and JSON parsing rules are
/// the same ones `FileStore` applies.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_file(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.files.insert(path.into(), text.into());
    }

    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Make every subsequent `save_dict` fail.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn read_input(&self, path: &Path, what: &str) -> Result<&str> {
        self.file(path).ok_or_else(|| {
            JumbleError::Store(format!(
                "Cannot read {} {}: not found",
                what,
                path.display()
            ))
        })
    }
}

impl DictStore for InMemoryStore {
    fn load_words(&self, source: &Path) -> Result<Vec<String>> {
        let text = self.file(source).ok_or_else(|| {
            JumbleError::Input(format!(
                "Input word list file {} does not exist.",
                source.display()
            ))
        })?;
        Ok(parse_word_list(text))
    }

    fn load_dict(&self, path: &Path) -> Result<JumbleDict> {
        Ok(serde_json::from_str(self.read_input(path, "jumble dict")?)?)
    }

    fn save_dict(&mut self, dict: &JumbleDict, path: &Path) -> Result<()> {
        if self.simulate_write_error {
            return Err(JumbleError::Store("Simulated write error".to_string()));
        }
        let content = serialize_dict(dict, false)?;
        self.files.insert(path.to_path_buf(), content);
        Ok(())
    }

    fn load_edit_request(&self, path: &Path) -> Result<EditRequest> {
        Ok(serde_json::from_str(self.read_input(path, "edit request")?)?)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub const WORD_LIST: &str = "words.txt";
    pub const DICT: &str = "jumble_dicts/jumble_dict.json";
    pub const EDIT_REQUEST: &str = "edit.json";

    /// The word list used across command tests: three anagram groups, shuffled.
    pub const SAMPLE_WORDS: &str =
        "arrogant\nsteer\nweird\nester\nwider\ntarragon\nreset\nwired\ntrees\n";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_word_list(mut self, text: &str) -> Self {
            self.store.insert_file(WORD_LIST, text);
            self
        }

        pub fn with_sample_words(self) -> Self {
            self.with_word_list(SAMPLE_WORDS)
        }

        pub fn with_dict(mut self, dict: &JumbleDict) -> Self {
            self.store.save_dict(dict, Path::new(DICT)).unwrap();
            self
        }

        pub fn with_edit_request(mut self, add: &[&str], remove: &[&str]) -> Self {
            let request = EditRequest::new(
                add.iter().map(|w| w.to_string()).collect(),
                remove.iter().map(|w| w.to_string()).collect(),
            );
            self.store
                .insert_file(EDIT_REQUEST, serde_json::to_string(&request).unwrap());
            self
        }

        pub fn saved_dict(&self, path: &str) -> JumbleDict {
            self.store.load_dict(Path::new(path)).unwrap()
        }
    }
}
