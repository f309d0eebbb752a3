//! # CLI Layer
//!
//! Builds the [`AppContext`] (config, store, API) from flags, environment and
//! `config.json`, then dispatches one subcommand or the interactive menu.
//!
//! Precedence for every setting: command line, then environment
//! (`MOVIEDB_HOME`, `OMDB_API_KEY`), then `config.json`, then defaults.
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: builds `AppContext`
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::menu;
use super::print::{
    print_config, print_messages, print_movie, print_movies, print_search, print_stats,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use moviedb::api::{ConfigAction, MovieApi};
use moviedb::config::MovieDbConfig;
use moviedb::error::{MovieDbError, Result};
use moviedb::fetch::omdb_from_key;
use moviedb::logging::setup_logging;
use moviedb::model::NewMovie;
use moviedb::query::MovieFilter;
use moviedb::store::{open_store, MovieStore};
use moviedb::website::DEFAULT_HEADING;
use std::path::PathBuf;

/// Overrides the directory holding `config.json` and the default data file.
pub const HOME_ENV: &str = "MOVIEDB_HOME";

pub(super) struct AppContext {
    pub(super) api: MovieApi<Box<dyn MovieStore>>,
    pub(super) config: MovieDbConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let ctx = init_context(&cli)?;
    log::debug!("Using data file {}", ctx.api.data_path().display());

    match cli.command {
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Add {
            title,
            year,
            rating,
            poster,
            id,
        }) => match (year, rating) {
            (Some(year), Some(rating)) => handle_add(
                &ctx,
                NewMovie::new(title, year, rating)
                    .with_poster(poster)
                    .with_external_id(id),
            ),
            (None, None) => handle_fetch_add(&ctx, &title),
            _ => Err(MovieDbError::Api(
                "--year and --rating must be given together".into(),
            )),
        },
        Some(Commands::Delete { title }) => handle_delete(&ctx, &title),
        Some(Commands::Update { title, rating }) => handle_update(&ctx, &title, rating),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Random) => handle_random(&ctx),
        Some(Commands::Search { query }) => handle_search(&ctx, &query),
        Some(Commands::Sort { field, order }) => handle_sort(&ctx, &field, order.as_deref()),
        Some(Commands::Filter {
            min_rating,
            start_year,
            end_year,
        }) => handle_filter(
            &ctx,
            &MovieFilter {
                min_rating,
                start_year,
                end_year,
            },
        ),
        Some(Commands::Website { heading, output }) => handle_website(&ctx, heading, output),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Menu) | None => menu::run(&ctx),
    }
}

fn app_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "moviedb", "moviedb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MovieDbError::Config("Could not determine the data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let app_dir = app_dir()?;
    let config = MovieDbConfig::load(&app_dir)?;

    let storage = cli.storage().unwrap_or(config.storage);
    let name = cli.name.clone().unwrap_or_else(|| config.name.clone());
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| app_dir.clone());

    let store = open_store(storage, storage.file_path(&data_dir, &name));
    Ok(AppContext {
        api: MovieApi::new(store, app_dir),
        config,
    })
}

pub(super) fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_movies()?;
    print_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_add(ctx: &AppContext, new_movie: NewMovie) -> Result<()> {
    let result = ctx.api.add_movie(new_movie)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_fetch_add(ctx: &AppContext, title: &str) -> Result<()> {
    let source = omdb_from_key(ctx.config.api_key.as_deref())?;
    let result = ctx.api.fetch_and_add(&source, title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_delete(ctx: &AppContext, title: &str) -> Result<()> {
    let result = ctx.api.delete_movie(title)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_update(ctx: &AppContext, title: &str, rating: f64) -> Result<()> {
    let result = ctx.api.update_movie(title, rating)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_random(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.random_movie(&mut rand::thread_rng())?;
    if let Some(movie) = result.listed_movies.first() {
        print!("Your movie for tonight: ");
        print_movie(movie);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_search(ctx: &AppContext, query: &str) -> Result<()> {
    let result = ctx.api.search(query)?;
    if let Some(results) = &result.search {
        print_search(results);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_sort(ctx: &AppContext, field: &str, order: Option<&str>) -> Result<()> {
    let result = ctx.api.sort(field, order)?;
    print_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_filter(ctx: &AppContext, criteria: &MovieFilter) -> Result<()> {
    let result = ctx.api.filter(criteria)?;
    print_movies(&result.listed_movies);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn handle_website(
    ctx: &AppContext,
    heading: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let heading = heading.unwrap_or_else(|| DEFAULT_HEADING.to_string());
    let output = output.unwrap_or_else(|| ctx.config.website_output.clone());
    let result = ctx.api.generate_website(
        &heading,
        ctx.config.template_dir.as_deref(),
        &output,
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
