//! # CLI Layer
//!
//! One possible UI client for jumble. This is the only place that parses arguments,
//! sets up logging, and writes to the terminal.
//!
//! - `run()`: parse, configure, resolve the mode, dispatch, print
//! - `init_logging()`: `env_logger` at a level picked by `-v` count (`RUST_LOG` still wins)
//! - `init_context()`: config file + command-line overrides + `JumbleApi<FileStore>`

use super::print::print_messages;
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use jumble::api::JumbleApi;
use jumble::config::{JumbleConfig, Mode};
use jumble::error::Result;
use jumble::store::fs::FileStore;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;

struct AppContext {
    api: JumbleApi<FileStore>,
    config: JumbleConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    let mode = ctx
        .config
        .mode(cli.base_word_list(), cli.edit_word_list_json())?;

    handle_mode(&mut ctx, &mode)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "jumble", "jumble").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match config_dir(cli) {
        Some(dir) => JumbleConfig::load(&dir)?,
        None => {
            log::warn!("no config directory available, using defaults");
            JumbleConfig::default()
        }
    };
    cli.apply_overrides(&mut config);

    let store = FileStore::new().with_pretty(config.pretty);
    Ok(AppContext {
        api: JumbleApi::new(store),
        config,
    })
}

fn handle_mode(ctx: &mut AppContext, mode: &Mode) -> Result<()> {
    log::debug!("running {:?}", mode);
    let result = ctx.api.run(mode)?;
    print_messages(&result.messages);
    Ok(())
}
