use super::{parse_word_list, serialize_dict, DictStore};
use crate::dict::JumbleDict;
use crate::error::{JumbleError, Result};
use crate::model::EditRequest;
use std::fs;
use std::path::Path;

#[derive(Debug, Default)]
pub struct FileStore {
    pretty: bool,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write dicts as indented JSON instead of a single line
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn ensure_parent_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                log::debug!("creating directory {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn read_input(&self, path: &Path, what: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            JumbleError::Store(format!("Cannot read {} {}: {}", what, path.display(), e))
        })
    }
}

impl DictStore for FileStore {
    fn load_words(&self, source: &Path) -> Result<Vec<String>> {
        if !source.is_file() {
            return Err(JumbleError::Input(format!(
                "Input word list file {} does not exist.",
                source.display()
            )));
        }
        let text = fs::read_to_string(source).map_err(|e| {
            JumbleError::Input(format!("Cannot read word list {}: {}", source.display(), e))
        })?;
        log::debug!("read {} bytes from {}", text.len(), source.display());
        Ok(parse_word_list(&text))
    }

    fn load_dict(&self, path: &Path) -> Result<JumbleDict> {
        let content = self.read_input(path, "jumble dict")?;
        let dict: JumbleDict = serde_json::from_str(&content)?;
        log::debug!("loaded {} keys from {}", dict.len(), path.display());
        Ok(dict)
    }

    fn save_dict(&mut self, dict: &JumbleDict, path: &Path) -> Result<()> {
        self.ensure_parent_dir(path)?;
        let content = serialize_dict(dict, self.pretty)?;
        fs::write(path, content)?;
        log::debug!("wrote {} keys to {}", dict.len(), path.display());
        Ok(())
    }

    fn load_edit_request(&self, path: &Path) -> Result<EditRequest> {
        let content = self.read_input(path, "edit request")?;
        Ok(serde_json::from_str(&content)?)
    }
}
