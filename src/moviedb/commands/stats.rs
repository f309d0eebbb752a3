use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MovieDbError, Result};
use crate::stats::compute_stats;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let movies = catalog.list()?;
    match compute_stats(&movies) {
        Ok(stats) => Ok(CmdResult::default().with_stats(stats)),
        Err(MovieDbError::InsufficientData { found, required }) => {
            Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "Statistics need at least {} movies, the catalog has {}",
                required, found
            ))))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Movie;
    use crate::store::memory::fixtures::sample_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn computes_stats() {
        let catalog = Catalog::new(sample_store());
        let stats = run(&catalog).unwrap().stats.unwrap();
        assert_eq!(stats.average, 6.75);
        assert_eq!(stats.median, 7.0);
    }

    #[test]
    fn too_few_movies_is_a_message() {
        let catalog = Catalog::new(InMemoryStore::with_movies(vec![Movie::new(
            "Solo", 2018, 6.9,
        )]));
        let result = run(&catalog).unwrap();

        assert!(result.stats.is_none());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
