use super::{read_existing, validate_loaded, write_atomic, MovieStore};
use crate::error::{MovieDbError, Result};
use crate::model::Movie;
use std::path::{Path, PathBuf};

/// Stores the catalog as a pretty-printed JSON array.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn bootstrap(&self) -> Result<()> {
        log::debug!("Creating empty JSON catalog at {}", self.path.display());
        write_atomic(&self.path, b"[]")
    }
}

impl MovieStore for JsonStore {
    fn load_all(&self) -> Result<Vec<Movie>> {
        let Some(content) = read_existing(&self.path)? else {
            self.bootstrap()?;
            return Ok(Vec::new());
        };

        let movies: Vec<Movie> = serde_json::from_str(&content)
            .map_err(|e| MovieDbError::corrupt(&self.path, e.to_string()))?;
        validate_loaded(&self.path, &movies)?;

        log::debug!("Loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save_all(&self, movies: &[Movie]) -> Result<()> {
        let content = serde_json::to_string_pretty(movies).map_err(MovieDbError::Serialization)?;
        write_atomic(&self.path, content.as_bytes())?;
        log::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
