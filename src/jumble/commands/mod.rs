use crate::dict::JumbleDict;
use crate::model::{BuildStats, EditStats};
use std::path::PathBuf;

pub mod build;
pub mod edit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub dict: Option<JumbleDict>,
    pub build_stats: Option<BuildStats>,
    pub edit_stats: Option<EditStats>,
    pub output_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_dict(mut self, dict: JumbleDict) -> Self {
        self.dict = Some(dict);
        self
    }

    pub fn with_build_stats(mut self, stats: BuildStats) -> Self {
        self.build_stats = Some(stats);
        self
    }

    pub fn with_edit_stats(mut self, stats: EditStats) -> Self {
        self.edit_stats = Some(stats);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }
}
