//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! moviedb operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs`, normalizes raw inputs (sort field
//! and order strings) and returns `Result<CmdResult>`. It does no printing and
//! holds no business logic.
//!
//! `MovieApi<S: MovieStore>` is generic over the storage backend:
//! - Production: `MovieApi<Box<dyn MovieStore>>`, JSON or CSV chosen at startup
//! - Testing: `MovieApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::fetch::MetadataSource;
use crate::model::NewMovie;
use crate::query::{MovieFilter, SortField, SortOrder};
use crate::store::MovieStore;
use rand::Rng;
use std::path::{Path, PathBuf};

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct MovieApi<S: MovieStore> {
    catalog: Catalog<S>,
    config_dir: PathBuf,
}

impl<S: MovieStore> MovieApi<S> {
    pub fn new(store: S, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog: Catalog::new(store),
            config_dir: config_dir.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    pub fn data_path(&self) -> &Path {
        self.catalog.store().path()
    }

    pub fn list_movies(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn add_movie(&self, new_movie: NewMovie) -> Result<CmdResult> {
        commands::add::run(&self.catalog, new_movie)
    }

    pub fn fetch_and_add<M: MetadataSource + ?Sized>(
        &self,
        source: &M,
        title: &str,
    ) -> Result<CmdResult> {
        commands::add::fetch_and_add(&self.catalog, source, title)
    }

    pub fn delete_movie(&self, title: &str) -> Result<CmdResult> {
        commands::delete::run(&self.catalog, title.trim())
    }

    pub fn update_movie(&self, title: &str, rating: f64) -> Result<CmdResult> {
        commands::update::run(&self.catalog, title.trim(), rating)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.catalog)
    }

    pub fn random_movie<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<CmdResult> {
        commands::random::run(&self.catalog, rng)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, query.trim())
    }

    /// Sorts by a field named `title`, `year` or `rating`; `order` defaults to desc.
    pub fn sort(&self, field: &str, order: Option<&str>) -> Result<CmdResult> {
        let field: SortField = field.parse()?;
        let order = match order {
            Some(order) => order.parse()?,
            None => SortOrder::default(),
        };
        commands::sort::run(&self.catalog, field, order)
    }

    pub fn filter(&self, criteria: &MovieFilter) -> Result<CmdResult> {
        commands::filter::run(&self.catalog, criteria)
    }

    pub fn generate_website(
        &self,
        heading: &str,
        template_dir: Option<&Path>,
        output: &Path,
    ) -> Result<CmdResult> {
        commands::website::run(&self.catalog, heading, template_dir, output)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
