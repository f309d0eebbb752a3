//! # CLI Behavior
//!
//! One possible UI client for moviedb. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution (`moviedb`)
//!
//! Running `moviedb` with no subcommand opens the interactive menu. Every menu
//! item is also available as a one-shot subcommand (`moviedb list`,
//! `moviedb add "Heat" --year 1995 --rating 8.3`, ...).
//!
//! ## Choosing the catalog
//!
//! `--json` / `--csv` select the backend, `--name` the data file stem and
//! `--data-dir` its directory. Without flags the values from `config.json`
//! apply, then the built-in defaults (`movie_db.json` in the app directory).
//!
//! ## Module Structure
//!
//! - `commands`: context setup, dispatch and per-command handlers
//! - `menu`: the interactive menu and its validated prompts
//! - `print`: colored output
//! - `setup`: argument parsing via clap

mod commands;
mod menu;
mod print;
pub mod setup;

pub use commands::run;
pub use print::report_error;
