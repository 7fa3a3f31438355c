use crate::error::{JumbleError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "jumble.json";
const DEFAULT_DICT_PATH: &str = "./jumble_dicts/jumble_dict.json";

/// Configuration for jumble, stored in `jumble.json`.
///
/// Every field can be overridden from the command line.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JumbleConfig {
    /// Dict read when editing
    #[serde(default = "default_dict_path")]
    pub in_jumble_dict_path: PathBuf,

    /// Dict written by both build and edit
    #[serde(default = "default_dict_path")]
    pub out_jumble_dict_path: PathBuf,

    /// Write indented JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_dict_path() -> PathBuf {
    PathBuf::from(DEFAULT_DICT_PATH)
}

impl Default for JumbleConfig {
    fn default() -> Self {
        Self {
            in_jumble_dict_path: default_dict_path(),
            out_jumble_dict_path: default_dict_path(),
            pretty: false,
        }
    }
}

impl JumbleConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: JumbleConfig = serde_json::from_str(&content)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Resolve which operation to run.
    ///
    /// Exactly one of `base_word_list` (build) and `edit_request` (edit) must be given.
    pub fn mode(
        &self,
        base_word_list: Option<PathBuf>,
        edit_request: Option<PathBuf>,
    ) -> Result<Mode> {
        match (base_word_list, edit_request) {
            (Some(word_list), None) => Ok(Mode::Build {
                word_list,
                out_path: self.out_jumble_dict_path.clone(),
            }),
            (None, Some(edit_request)) => Ok(Mode::Edit {
                in_path: self.in_jumble_dict_path.clone(),
                edit_request,
                out_path: self.out_jumble_dict_path.clone(),
            }),
            _ => Err(JumbleError::Configuration(
                "Provide a base word list or a list of words to add/remove (but not both)"
                    .to_string(),
            )),
        }
    }
}

/// A fully resolved run: everything the API needs, nothing from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Build a dict from scratch
    Build {
        word_list: PathBuf,
        out_path: PathBuf,
    },
    /// Edit an existing dict
    Edit {
        in_path: PathBuf,
        edit_request: PathBuf,
        out_path: PathBuf,
    },
}
