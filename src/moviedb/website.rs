//! # Website generator
//!
//! Renders the catalog into a single static `index.html` page.
//!
//! The page is built from two minijinja templates, `index.html` (the page) and
//! `movie.html` (one grid entry, included once per movie). Both are embedded in
//! the binary. A template directory may override either one; files missing
//! from it fall back to the embedded version.
//!
//! Template names end in `.html`, so minijinja escapes every interpolated value.

use crate::error::Result;
use crate::model::Movie;
use crate::store::write_atomic;
use minijinja::Environment;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
pub const MOVIE_TEMPLATE: &str = include_str!("templates/movie.html");

const INDEX_NAME: &str = "index.html";
const MOVIE_NAME: &str = "movie.html";
pub const DEFAULT_HEADING: &str = "My Movie App";
const STAR: &str = "⭐";
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

/// One grid entry. Layout values are computed here, the template only places them.
#[derive(Debug, Serialize)]
struct MovieCard {
    title: String,
    year: i32,
    poster: String,
    has_poster: bool,
    stars: String,
    link: String,
}

#[derive(Debug, Serialize)]
struct PageData {
    heading: String,
    movies: Vec<MovieCard>,
}

impl From<&Movie> for MovieCard {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            poster: movie.poster.clone(),
            has_poster: movie.has_poster(),
            stars: stars(movie.rating),
            link: imdb_link(movie.external_id.as_deref()),
        }
    }
}

/// One star per two rating points, rounded down.
pub fn stars(rating: f64) -> String {
    let count = (rating / 2.0).floor().max(0.0) as usize;
    STAR.repeat(count)
}

pub fn imdb_link(external_id: Option<&str>) -> String {
    match external_id {
        Some(id) if !id.trim().is_empty() => format!("{}{}/", IMDB_TITLE_URL, id.trim()),
        _ => "#".to_string(),
    }
}

fn environment(template_dir: Option<&Path>) -> Result<Environment<'static>> {
    let mut env = Environment::new();

    if let Some(dir) = template_dir {
        log::debug!("Loading website templates from {}", dir.display());
        env.set_loader(minijinja::path_loader(dir.to_path_buf()));
    }

    for (name, source) in [(INDEX_NAME, INDEX_TEMPLATE), (MOVIE_NAME, MOVIE_TEMPLATE)] {
        let overridden = template_dir.is_some_and(|dir| dir.join(name).is_file());
        if !overridden {
            env.add_template(name, source)?;
        }
    }
    Ok(env)
}

/// Renders the page for `movies` under `heading`.
pub fn render_website(
    movies: &[Movie],
    heading: &str,
    template_dir: Option<&Path>,
) -> Result<String> {
    let env = environment(template_dir)?;
    let data = PageData {
        heading: heading.to_string(),
        movies: movies.iter().map(MovieCard::from).collect(),
    };
    Ok(env.get_template(INDEX_NAME)?.render(&data)?)
}

/// Renders the page and writes it to `output`, replacing any previous page.
pub fn generate_website(
    movies: &[Movie],
    heading: &str,
    template_dir: Option<&Path>,
    output: &Path,
) -> Result<PathBuf> {
    let html = render_website(movies, heading, template_dir)?;
    write_atomic(output, html.as_bytes())?;
    log::info!("Website with {} movie(s) written to {}", movies.len(), output.display());
    Ok(output.to_path_buf())
}
