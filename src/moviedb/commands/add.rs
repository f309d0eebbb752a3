use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MovieDbError, Result};
use crate::fetch::MetadataSource;
use crate::model::NewMovie;
use crate::store::MovieStore;

/// Adds a movie whose details the user supplied.
pub fn run<S: MovieStore>(catalog: &Catalog<S>, new_movie: NewMovie) -> Result<CmdResult> {
    match catalog.add(new_movie) {
        Ok(movie) => Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Movie '{}' ({}) added",
                movie.title, movie.year
            )))
            .with_affected_movies(vec![movie])),
        Err(MovieDbError::DuplicateTitle(title)) => Ok(CmdResult::default().with_message(
            CmdMessage::warning(format!("Movie '{}' already exists", title)),
        )),
        Err(e) => Err(e),
    }
}

/// Looks `title` up in `source` and adds what it finds.
///
/// Titles already in the catalog are rejected before any lookup happens.
pub fn fetch_and_add<S: MovieStore, M: MetadataSource + ?Sized>(
    catalog: &Catalog<S>,
    source: &M,
    title: &str,
) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MovieDbError::Api("Title cannot be empty".into()));
    }
    if catalog.exists(title, false)? {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' already exists",
            title
        ))));
    }

    match source.lookup(title)? {
        Some(fetched) => run(catalog, fetched.into_new_movie()),
        None => Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' not found",
            title
        )))),
    }
}
