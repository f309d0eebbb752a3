use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks one movie uniformly at random.
pub fn run<S: MovieStore, R: Rng + ?Sized>(catalog: &Catalog<S>, rng: &mut R) -> Result<CmdResult> {
    let movies = catalog.list()?;
    match movies.choose(rng) {
        Some(movie) => Ok(CmdResult::default().with_listed_movies(vec![movie.clone()])),
        None => Ok(CmdResult::default()
            .with_message(CmdMessage::warning("The catalog is empty, nothing to pick"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::{sample_movies, sample_store};
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_a_catalog_movie() {
        let catalog = Catalog::new(sample_store());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let result = run(&catalog, &mut rng).unwrap();
            assert_eq!(result.listed_movies.len(), 1);
            assert!(sample_movies().contains(&result.listed_movies[0]));
        }
    }

    #[test]
    fn same_seed_same_pick() {
        let catalog = Catalog::new(sample_store());
        let a = run(&catalog, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = run(&catalog, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.listed_movies, b.listed_movies);
    }

    #[test]
    fn empty_catalog_warns() {
        let catalog = Catalog::new(InMemoryStore::new());
        let result = run(&catalog, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
