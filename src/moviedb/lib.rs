//! # moviedb Architecture
//!
//! moviedb keeps a personal movie catalog in a single JSON or CSV file. It is a
//! library that happens to have a CLI client: everything except `cli/` is UI
//! agnostic.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap parsing, interactive menu, colored output           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, normalizes raw input          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! │  - Catalog facade, stats, sort/filter, search, website      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MovieStore trait: load_all / save_all                    │
//! │  - JsonStore, CsvStore (production), InMemoryStore (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is chosen once at startup and never changes for the life of the
//! process. Every operation reloads the full snapshot from the store, so a
//! long-running menu session always sees the current file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each operation
//! - [`catalog`]: Read-modify-write facade over one store
//! - [`store`]: Storage abstraction and the JSON/CSV/in-memory backends
//! - [`model`]: `Movie` and `NewMovie`
//! - [`stats`], [`query`], [`search`]: pure functions over a snapshot
//! - [`fetch`]: OMDb metadata lookup
//! - [`website`]: static HTML page generation
//! - [`config`]: `config.json` handling
//! - [`logging`]: `env_logger` setup
//! - [`error`]: Error types
//! - `cli`: argument parsing, menu and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod query;
pub mod search;
pub mod stats;
pub mod store;
pub mod website;
