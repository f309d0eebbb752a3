use super::MovieStore;
use crate::error::{MovieDbError, Result};
use crate::model::Movie;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since moviedb is single-threaded.
pub struct InMemoryStore {
    movies: RefCell<Vec<Movie>>,
    path: PathBuf,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            movies: RefCell::new(Vec::new()),
            path: PathBuf::from(":memory:"),
            simulate_write_error: Cell::new(false),
            saves: Cell::new(0),
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let store = Self::default();
        *store.movies.borrow_mut() = movies;
        store
    }

    /// Make every subsequent `save_all` fail, for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `save_all` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Replace the content behind the store's back, like another process editing the file.
    pub fn replace_externally(&self, movies: Vec<Movie>) {
        *self.movies.borrow_mut() = movies;
    }
}

impl MovieStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.borrow().clone())
    }

    fn save_all(&self, movies: &[Movie]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(MovieDbError::write(
                &self.path,
                std::io::Error::other("simulated write failure"),
            ));
        }
        *self.movies.borrow_mut() = movies.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Four movies rated 3, 7, 7 and 10.
    pub fn sample_movies() -> Vec<Movie> {
        vec![
            Movie::new("The Room", 2003, 3.0),
            Movie::new("Heat", 1995, 7.0),
            Movie::new("Alien", 1979, 7.0),
            Movie::new("The Godfather", 1972, 10.0).with_external_id("tt0068646"),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_movies(sample_movies())
    }
}
