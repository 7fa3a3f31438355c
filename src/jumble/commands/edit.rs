use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EditRequest;
use crate::store::DictStore;
use std::path::Path;

/// Loads the dict at `in_path`, applies the edit request stored at `request_path` and
/// writes the result to `out_path`. The two paths may be the same.
pub fn run<S: DictStore>(
    store: &mut S,
    in_path: &Path,
    request_path: &Path,
    out_path: &Path,
) -> Result<CmdResult> {
    let request = store.load_edit_request(request_path)?;
    let mut result = apply(store, in_path, &request, out_path)?;
    result.messages.insert(
        0,
        CmdMessage::info(format!(
            "Getting words to add/remove from {}...",
            request_path.display()
        )),
    );
    Ok(result)
}

/// Like [`run`], with the edit request already in hand.
pub fn apply<S: DictStore>(
    store: &mut S,
    in_path: &Path,
    request: &EditRequest,
    out_path: &Path,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Editing existing jumble dict {}...",
        in_path.display()
    )));

    let mut dict = store.load_dict(in_path)?;
    if request.is_empty() {
        result.add_message(CmdMessage::warning(
            "Edit request has no words to add or remove.",
        ));
    }

    let stats = dict.apply_request(request);
    log::info!(
        "edited {}: +{} ({} skipped), -{} ({} entries deleted)",
        in_path.display(),
        stats.added,
        stats.skipped,
        stats.removed,
        stats.entries_deleted
    );

    if !request.words_to_add.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Added {} words ({} already present)",
            stats.added, stats.skipped
        )));
    }
    if !request.words_to_remove.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Removed {} words ({} entries deleted)",
            stats.removed, stats.entries_deleted
        )));
    }

    store.save_dict(&dict, out_path)?;
    result.add_message(CmdMessage::success(format!(
        "Edited jumble dict written to {}",
        out_path.display()
    )));

    Ok(result
        .with_dict(dict)
        .with_edit_stats(stats)
        .with_output_path(out_path.to_path_buf()))
}
