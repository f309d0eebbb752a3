//! # Commands
//!
//! One module per user-facing operation. Each `run` takes the [`Catalog`] it
//! acts on plus its arguments and returns a [`CmdResult`]: the movies touched
//! or listed, any computed payload, and the messages to show.
//!
//! Expected outcomes that are not failures (deleting an unknown title, stats
//! over too few movies, a search without hits) come back as messages. Only
//! storage, network and template failures are errors.
//!
//! [`Catalog`]: crate::catalog::Catalog

use crate::config::MovieDbConfig;
use crate::model::Movie;
use crate::search::SearchResults;
use crate::stats::MovieStats;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod filter;
pub mod list;
pub mod random;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;
pub mod website;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
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

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_movies: Vec<Movie>,
    pub listed_movies: Vec<Movie>,
    pub stats: Option<MovieStats>,
    pub search: Option<SearchResults>,
    pub output_path: Option<PathBuf>,
    pub config: Option<MovieDbConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_movies(mut self, movies: Vec<Movie>) -> Self {
        self.affected_movies = movies;
        self
    }

    pub fn with_listed_movies(mut self, movies: Vec<Movie>) -> Self {
        self.listed_movies = movies;
        self
    }

    pub fn with_stats(mut self, stats: MovieStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_search(mut self, results: SearchResults) -> Self {
        self.search = Some(results);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: MovieDbConfig) -> Self {
        self.config = Some(config);
        self
    }
}
