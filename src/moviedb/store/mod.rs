//! # Storage Layer
//!
//! The [`MovieStore`] trait is the only thing the rest of moviedb knows about
//! persistence. A store holds the path of one data file and moves complete
//! snapshots in and out of it:
//!
//! - `load_all` reads and parses the whole file
//! - `save_all` replaces the whole file
//!
//! There are no partial updates. Callers (see [`crate::catalog`]) do
//! read-all, modify, write-all.
//!
//! ## Implementations
//!
//! - [`json_file::JsonStore`]: a JSON array of movie objects
//! - [`csv_file::CsvStore`]: a CSV table with a `Title,Rating,Year,Poster,ID` header
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Bootstrap
//!
//! A missing data file is not an error. The first `load_all` writes an empty,
//! well-formed file (`[]` or a header-only CSV) and returns no movies.
//!
//! ## Atomic writes
//!
//! File stores write to a temporary sibling (`.<name>-<uuid>.tmp`) and rename it
//! over the data file, so an interrupted save leaves the previous content intact.

use crate::error::{MovieDbError, Result};
use crate::model::Movie;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

pub mod csv_file;
pub mod json_file;
pub mod memory;

/// Abstract interface for movie persistence.
pub trait MovieStore {
    /// Load every stored movie, bootstrapping an empty file if none exists.
    fn load_all(&self) -> Result<Vec<Movie>>;

    /// Replace the stored movies with `movies`.
    fn save_all(&self, movies: &[Movie]) -> Result<()>;

    /// Location of the backing data.
    fn path(&self) -> &Path;
}

impl<S: MovieStore + ?Sized> MovieStore for Box<S> {
    fn load_all(&self) -> Result<Vec<Movie>> {
        (**self).load_all()
    }

    fn save_all(&self, movies: &[Movie]) -> Result<()> {
        (**self).save_all(movies)
    }

    fn path(&self) -> &Path {
        (**self).path()
    }
}

/// The file format backing a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    #[default]
    Json,
    Csv,
}

impl StorageKind {
    pub fn extension(&self) -> &'static str {
        match self {
            StorageKind::Json => "json",
            StorageKind::Csv => "csv",
        }
    }

    /// Data file path for a catalog named `name` inside `dir`.
    pub fn file_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(format!("{}.{}", name, self.extension()))
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for StorageKind {
    type Err = MovieDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "csv" => Ok(StorageKind::Csv),
            other => Err(MovieDbError::Config(format!(
                "Unknown storage kind '{}' (expected json or csv)",
                other
            ))),
        }
    }
}

/// Opens the store for `kind` over `path`.
pub fn open_store(kind: StorageKind, path: impl Into<PathBuf>) -> Box<dyn MovieStore> {
    let path = path.into();
    log::debug!("Opening {} store at {}", kind, path.display());
    match kind {
        StorageKind::Json => Box::new(json_file::JsonStore::new(path)),
        StorageKind::Csv => Box::new(csv_file::CsvStore::new(path)),
    }
}

/// Replace `path` with `contents` via a temporary file in the same directory.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).map_err(|e| MovieDbError::write(path, e))?;
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("data");
    let tmp_path = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));

    if let Err(e) = fs::write(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(MovieDbError::write(path, e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(MovieDbError::write(path, e));
    }
    Ok(())
}

/// Read `path` to a string, or `None` if it does not exist.
pub(crate) fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
            Err(MovieDbError::corrupt(path, "not valid UTF-8"))
        }
        Err(e) => Err(MovieDbError::Io(e)),
    }
}

/// Rejects records that parsed but violate the model (empty titles).
pub(crate) fn validate_loaded(path: &Path, movies: &[Movie]) -> Result<()> {
    if let Some(pos) = movies.iter().position(|m| m.title.trim().is_empty()) {
        return Err(MovieDbError::corrupt(
            path,
            format!("record {} has an empty title", pos + 1),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_kind_parse() {
        assert_eq!("json".parse::<StorageKind>().unwrap(), StorageKind::Json);
        assert_eq!(" CSV ".parse::<StorageKind>().unwrap(), StorageKind::Csv);
        assert!("xml".parse::<StorageKind>().is_err());
    }

    #[test]
    fn test_file_path_follows_kind() {
        let dir = Path::new("/data");
        assert_eq!(
            StorageKind::Csv.file_path(dir, "movie_db"),
            PathBuf::from("/data/movie_db.csv")
        );
        assert_eq!(
            StorageKind::Json.file_path(dir, "movie_db"),
            PathBuf::from("/data/movie_db.json")
        );
    }

    #[test]
    fn test_write_atomic_creates_parent_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("movies.json");

        write_atomic(&target, b"[]").unwrap();
        write_atomic(&target, b"[ ]").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "[ ]");
        for entry in fs::read_dir(target.parent().unwrap()).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn test_read_existing_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(read_existing(&dir.path().join("nope.json")).unwrap().is_none());
    }

    #[test]
    fn test_open_store_dispatches_on_kind() {
        let dir = TempDir::new().unwrap();
        let store = open_store(StorageKind::Csv, dir.path().join("m.csv"));
        assert!(store.load_all().unwrap().is_empty());
        let header = fs::read_to_string(dir.path().join("m.csv")).unwrap();
        assert!(header.starts_with("Title,Rating,Year,Poster"));
    }
}
