use crate::commands::{CmdMessage, CmdResult};
use crate::dict::build_index;
use crate::error::Result;
use crate::model::BuildStats;
use crate::store::DictStore;
use std::path::Path;

/// Builds a jumble dict from the word list at `word_list` and writes it to `out_path`.
pub fn run<S: DictStore>(store: &mut S, word_list: &Path, out_path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Generating jumble dict from word list..."));

    let words = store.load_words(word_list)?;
    let word_count = words.len();
    let dict = build_index(words)?;

    let stats = BuildStats {
        words: word_count,
        keys: dict.len(),
    };
    log::info!(
        "built jumble dict from {}: {} words, {} keys",
        word_list.display(),
        stats.words,
        stats.keys
    );
    result.add_message(CmdMessage::info(format!("{} words in word list", stats.words)));
    result.add_message(CmdMessage::info(format!("{} keys in jumble dict", stats.keys)));

    store.save_dict(&dict, out_path)?;
    result.add_message(CmdMessage::success(format!(
        "Jumble dict written to {}",
        out_path.display()
    )));

    Ok(result
        .with_dict(dict)
        .with_build_stats(stats)
        .with_output_path(out_path.to_path_buf()))
}
