//! # Catalog
//!
//! [`Catalog`] is the in-memory view over one [`MovieStore`]. Every public
//! operation starts with a fresh `load_all`, so a catalog that lives across many
//! menu actions always sees the current file, including edits made by hand.
//! Mutations rewrite the full snapshot with `save_all`.
//!
//! Titles are the natural key and compare case-insensitively for add, delete
//! and update. Store errors propagate unchanged; nothing is retried.

use crate::error::{MovieDbError, Result};
use crate::model::{Movie, NewMovie};
use crate::store::MovieStore;

pub struct Catalog<S: MovieStore> {
    store: S,
}

impl<S: MovieStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All movies, in stored order.
    pub fn list(&self) -> Result<Vec<Movie>> {
        self.store.load_all()
    }

    pub fn exists(&self, title: &str, case_sensitive: bool) -> Result<bool> {
        Ok(self
            .store
            .load_all()?
            .iter()
            .any(|m| m.title_matches(title, case_sensitive)))
    }

    /// First movie whose title matches case-insensitively.
    pub fn find(&self, title: &str) -> Result<Option<Movie>> {
        Ok(self
            .store
            .load_all()?
            .into_iter()
            .find(|m| m.title_matches(title, false)))
    }

    /// Append a movie. Surrounding whitespace is stripped from the title, which
    /// fails with `DuplicateTitle` if already present in any letter case.
    pub fn add(&self, mut new_movie: NewMovie) -> Result<Movie> {
        new_movie.title = new_movie.title.trim().to_string();
        if new_movie.title.is_empty() {
            return Err(MovieDbError::Api("Title cannot be empty".into()));
        }

        let mut movies = self.store.load_all()?;
        if let Some(existing) = movies
            .iter()
            .find(|m| m.title_matches(&new_movie.title, false))
        {
            return Err(MovieDbError::DuplicateTitle(existing.title.clone()));
        }

        let movie = new_movie.into_movie();
        movies.push(movie.clone());
        self.store.save_all(&movies)?;

        log::info!("Added movie '{}' ({})", movie.title, movie.year);
        Ok(movie)
    }

    /// Remove every movie matching `title`. Returns how many were removed;
    /// an unknown title removes nothing.
    pub fn delete(&self, title: &str) -> Result<usize> {
        let movies = self.store.load_all()?;
        let before = movies.len();
        let remaining: Vec<Movie> = movies
            .into_iter()
            .filter(|m| !m.title_matches(title, false))
            .collect();
        let removed = before - remaining.len();

        self.store.save_all(&remaining)?;
        log::info!("Deleted {} movie(s) titled '{}'", removed, title);
        Ok(removed)
    }

    /// Set the rating of every movie matching `title`. Returns how many changed.
    pub fn update(&self, title: &str, rating: f64) -> Result<usize> {
        let mut movies = self.store.load_all()?;
        let mut updated = 0;
        for movie in movies.iter_mut().filter(|m| m.title_matches(title, false)) {
            movie.rating = rating;
            updated += 1;
        }

        self.store.save_all(&movies)?;
        log::info!("Updated rating of {} movie(s) titled '{}'", updated, title);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_store;
    use crate::store::memory::InMemoryStore;

    fn catalog() -> Catalog<InMemoryStore> {
        Catalog::new(InMemoryStore::new())
    }

    #[test]
    fn exists_after_add_ignores_case() {
        let catalog = catalog();
        catalog.add(NewMovie::new("titanic", 1997, 7.9)).unwrap();

        assert!(catalog.exists("Titanic", false).unwrap());
        assert!(!catalog.exists("Titanic", true).unwrap());
        assert!(catalog.exists("titanic", true).unwrap());
    }

    #[test]
    fn add_rejects_duplicate_title() {
        let catalog = catalog();
        catalog.add(NewMovie::new("Titanic", 1997, 7.9)).unwrap();

        let err = catalog.add(NewMovie::new("TITANIC", 2000, 1.0)).unwrap_err();
        assert!(matches!(err, MovieDbError::DuplicateTitle(ref t) if t == "Titanic"));
        assert_eq!(catalog.list().unwrap().len(), 1);
    }

    #[test]
    fn add_trims_title_before_duplicate_check() {
        let catalog = catalog();
        catalog.add(NewMovie::new("Heat", 1995, 8.3)).unwrap();

        let err = catalog.add(NewMovie::new("Heat ", 1995, 1.0)).unwrap_err();
        assert!(matches!(err, MovieDbError::DuplicateTitle(ref t) if t == "Heat"));

        let added = catalog.add(NewMovie::new("  Alien\t", 1979, 8.5)).unwrap();
        assert_eq!(added.title, "Alien");
        assert_eq!(catalog.delete("Alien").unwrap(), 1);
        assert_eq!(catalog.list().unwrap().len(), 1);
    }

    #[test]
    fn add_rejects_empty_title() {
        let catalog = catalog();
        assert!(catalog.add(NewMovie::new("  ", 1997, 7.9)).is_err());
        assert_eq!(catalog.store().save_count(), 0);
    }

    #[test]
    fn add_appends_at_end() {
        let catalog = Catalog::new(sample_store());
        catalog.add(NewMovie::new("Up", 2009, 8.3)).unwrap();

        let movies = catalog.list().unwrap();
        assert_eq!(movies.len(), 5);
        assert_eq!(movies.last().unwrap().title, "Up");
    }

    #[test]
    fn delete_is_idempotent() {
        let catalog = Catalog::new(sample_store());
        let before = catalog.list().unwrap();

        assert_eq!(catalog.delete("Nonexistent").unwrap(), 0);
        assert_eq!(catalog.delete("Nonexistent").unwrap(), 0);
        assert_eq!(catalog.list().unwrap(), before);
    }

    #[test]
    fn delete_removes_case_insensitive_matches() {
        let catalog = Catalog::new(sample_store());
        assert_eq!(catalog.delete("heat").unwrap(), 1);

        let titles: Vec<_> = catalog.list().unwrap().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["The Room", "Alien", "The Godfather"]);
    }

    #[test]
    fn update_on_missing_title_is_noop() {
        let catalog = Catalog::new(sample_store());
        let before = catalog.list().unwrap();

        assert_eq!(catalog.update("Nonexistent", 5.0).unwrap(), 0);
        assert_eq!(catalog.list().unwrap(), before);
    }

    #[test]
    fn update_sets_rating_only() {
        let catalog = Catalog::new(sample_store());
        assert_eq!(catalog.update("ALIEN", 9.1).unwrap(), 1);

        let alien = catalog.find("alien").unwrap().unwrap();
        assert_eq!(alien.rating, 9.1);
        assert_eq!(alien.year, 1979);
    }

    #[test]
    fn every_call_sees_external_changes() {
        let catalog = Catalog::new(sample_store());
        assert!(catalog.exists("Heat", false).unwrap());

        catalog.store().replace_externally(vec![]);
        assert!(!catalog.exists("Heat", false).unwrap());
        assert!(catalog.list().unwrap().is_empty());
    }

    #[test]
    fn write_errors_propagate() {
        let catalog = Catalog::new(sample_store());
        catalog.store().set_simulate_write_error(true);

        let err = catalog.delete("Heat").unwrap_err();
        assert!(matches!(err, MovieDbError::StorageWrite { .. }));
        catalog.store().set_simulate_write_error(false);
        assert!(catalog.exists("Heat", false).unwrap());
    }
}
