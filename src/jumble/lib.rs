//! # Jumble Architecture
//!
//! Jumble builds and maintains a **jumble dict**: an anagram index mapping the sorted
//! letters of a word (its signature) to every known word spelled with exactly those
//! letters. Word puzzles such as the Spelling Bee are solved by sorting the puzzle's
//! letters and looking the result up.
//!
//! Like any well-behaved tool, it is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, resolves the run mode, prints messages │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, dispatches on `Mode`          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads inputs through the store, runs the core, saves     │
//! │  - Returns `CmdResult` values with status messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (signature.rs, dict.rs) + Storage Layer (store/)      │
//! │  - Pure index construction and editing                      │
//! │  - DictStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! The core is two operations over [`dict::JumbleDict`]:
//!
//! - [`dict::build_index`]: groups a non-empty word sequence by signature, keeping input order
//! - [`dict::edit_index`]: applies an add list then a remove list in place
//!
//! Both rest on [`signature::signature`]. Neither touches the filesystem; the store and the
//! command layer handle reading word lists, edit requests and persisted dicts.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: `build` and `edit` commands
//! - [`store`]: Storage abstraction and implementations
//! - [`dict`]: The jumble dict and its invariants
//! - [`signature`]: Signature derivation
//! - [`model`]: Edit requests and edit statistics
//! - [`config`]: Configuration and run mode resolution
//! - [`error`]: Error types
//! - `cli`: Argument parsing and message printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod dict;
pub mod error;
pub mod model;
pub mod signature;
pub mod store;
