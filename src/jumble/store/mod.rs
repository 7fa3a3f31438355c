//! # Storage Layer
//!
//! The [`DictStore`] trait is everything the command layer needs from the outside world:
//! reading a word list, reading and writing a jumble dict, and reading an edit request.
//! The core ([`crate::dict`]) never sees a path.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Word lists are UTF-8 text, one word per line
//!   - Dicts and edit requests are JSON
//!   - Creates the output directory when saving
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Files are a path-to-text map, parsed with the same rules as `FileStore`
//!
//! ## Formats
//!
//! ```text
//! words.txt          arrogant\nsteer\nweird\n...
//! jumble_dict.json   {"aagnorrt": ["arrogant", "tarragon"], ...}
//! edit.json          {"words_to_add": [...], "words_to_remove": [...]}
//! ```

use crate::dict::JumbleDict;
use crate::error::Result;
use crate::model::EditRequest;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for reading inputs and persisting dicts.
pub trait DictStore {
    /// Read the words of a word list. Missing or unreadable sources are
    /// [`crate::error::JumbleError::Input`] errors.
    fn load_words(&self, source: &Path) -> Result<Vec<String>>;

    /// Load a persisted jumble dict
    fn load_dict(&self, path: &Path) -> Result<JumbleDict>;

    /// Persist a jumble dict, replacing whatever is at `path`
    fn save_dict(&mut self, dict: &JumbleDict, path: &Path) -> Result<()>;

    /// Load an edit request
    fn load_edit_request(&self, path: &Path) -> Result<EditRequest>;
}

/// Splits word list text into words, one per line.
///
/// Whitespace around each line (including `\r`) is stripped so that indented or
/// padded lists key the same as clean ones, and blank lines are skipped. Case is
/// left alone.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn serialize_dict(dict: &JumbleDict, pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(dict)?
    } else {
        serde_json::to_string(dict)?
    };
    Ok(content)
}
