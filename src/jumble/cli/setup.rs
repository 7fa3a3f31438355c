use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser};
use jumble::config::JumbleConfig;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "jumble", bin_name = "jumble", version = get_version())]
#[command(
    about = "Assemble or edit a jumble dict of words for solving letter puzzles",
    long_about = None
)]
pub struct Cli {
    /// Word list (one word per line) to build a new jumble dict from
    #[arg(long, value_name = "PATH", value_parser = path_parser())]
    pub base_word_list: Option<PathBuf>,

    /// JSON file with `words_to_add` and/or `words_to_remove` to apply to an existing dict
    #[arg(long, value_name = "PATH", value_parser = path_parser())]
    pub edit_word_list_json: Option<PathBuf>,

    /// Jumble dict to edit [default: ./jumble_dicts/jumble_dict.json]
    #[arg(long, value_name = "PATH", value_parser = path_parser())]
    pub in_jumble_dict_path: Option<PathBuf>,

    /// Where to write the built or edited dict [default: ./jumble_dicts/jumble_dict.json]
    #[arg(long, value_name = "PATH", value_parser = path_parser())]
    pub out_jumble_dict_path: Option<PathBuf>,

    /// Directory holding jumble.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Verbose output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Layer command-line values over the loaded config.
    pub fn apply_overrides(&self, config: &mut JumbleConfig) {
        if let Some(path) = non_empty(&self.in_jumble_dict_path) {
            config.in_jumble_dict_path = path;
        }
        if let Some(path) = non_empty(&self.out_jumble_dict_path) {
            config.out_jumble_dict_path = path;
        }
        if self.pretty {
            config.pretty = true;
        }
    }

    pub fn base_word_list(&self) -> Option<PathBuf> {
        non_empty(&self.base_word_list)
    }

    pub fn edit_word_list_json(&self) -> Option<PathBuf> {
        non_empty(&self.edit_word_list_json)
    }
}

// Accepts "" so `non_empty` can treat it as not given; clap's PathBuf parser rejects it
fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

// An empty path counts as not given
fn non_empty(path: &Option<PathBuf>) -> Option<PathBuf> {
    path.as_ref()
        .filter(|p| !p.as_os_str().is_empty())
        .cloned()
}
