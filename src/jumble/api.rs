//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for jumble
//! operations, whatever the UI.
//!
//! `JumbleApi<S: DictStore>` is generic over the storage backend:
//! - Production: `JumbleApi<FileStore>`
//! - Testing: `JumbleApi<InMemoryStore>`
//!
//! The API dispatches and returns structured `CmdResult` values. It holds no business
//! logic and does no terminal output.

use crate::commands;
use crate::config::Mode;
use crate::error::Result;
use crate::model::EditRequest;
use crate::store::DictStore;
use std::path::Path;

pub struct JumbleApi<S: DictStore> {
    store: S,
}

impl<S: DictStore> JumbleApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Run a resolved mode.
    pub fn run(&mut self, mode: &Mode) -> Result<commands::CmdResult> {
        match mode {
            Mode::Build {
                word_list,
                out_path,
            } => self.build(word_list, out_path),
            Mode::Edit {
                in_path,
                edit_request,
                out_path,
            } => self.edit(in_path, edit_request, out_path),
        }
    }

    pub fn build(&mut self, word_list: &Path, out_path: &Path) -> Result<commands::CmdResult> {
        commands::build::run(&mut self.store, word_list, out_path)
    }

    pub fn edit(
        &mut self,
        in_path: &Path,
        request_path: &Path,
        out_path: &Path,
    ) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, in_path, request_path, out_path)
    }

    pub fn apply_edit(
        &mut self,
        in_path: &Path,
        request: &EditRequest,
        out_path: &Path,
    ) -> Result<commands::CmdResult> {
        commands::edit::apply(&mut self.store, in_path, request, out_path)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::JumbleDict;
    use crate::error::JumbleError;
    use crate::store::memory::fixtures::{StoreFixture, DICT, EDIT_REQUEST, WORD_LIST};
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(fixture: StoreFixture) -> JumbleApi<InMemoryStore> {
        JumbleApi::new(fixture.store)
    }

    #[test]
    fn run_build_dispatches_to_build() {
        let mut api = api(StoreFixture::new().with_sample_words());
        let mode = Mode::Build {
            word_list: PathBuf::from(WORD_LIST),
            out_path: PathBuf::from(DICT),
        };

        let result = api.run(&mode).unwrap();

        assert!(result.build_stats.is_some());
        assert!(result.edit_stats.is_none());
        assert!(api.store().file(Path::new(DICT)).is_some());
    }

    #[test]
    fn run_edit_dispatches_to_edit() {
        let dict = JumbleDict::from_iter([("deirw", vec!["weird"])]);
        let mut api = api(
            StoreFixture::new()
                .with_dict(&dict)
                .with_edit_request(&["wider"], &[]),
        );
        let mode = Mode::Edit {
            in_path: PathBuf::from(DICT),
            edit_request: PathBuf::from(EDIT_REQUEST),
            out_path: PathBuf::from(DICT),
        };

        let result = api.run(&mode).unwrap();

        assert!(result.edit_stats.is_some());
        assert_eq!(
            result.dict.unwrap().get("deirw").unwrap(),
            &["weird", "wider"]
        );
    }

    #[test]
    fn build_errors_propagate() {
        let mut api = api(StoreFixture::new());
        let err = api
            .build(Path::new(WORD_LIST), Path::new(DICT))
            .unwrap_err();
        assert!(matches!(err, JumbleError::Input(_)));
    }

    #[test]
    fn apply_edit_with_inline_request() {
        let dict = JumbleDict::from_iter([("deirw", vec!["weird"])]);
        let mut api = api(StoreFixture::new().with_dict(&dict));
        let request = EditRequest::new(vec![], vec!["weird".into()]);

        let result = api
            .apply_edit(Path::new(DICT), &request, Path::new(DICT))
            .unwrap();

        assert!(result.dict.unwrap().is_empty());
    }
}
