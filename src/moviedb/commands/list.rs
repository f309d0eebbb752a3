use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>) -> Result<CmdResult> {
    let movies = catalog.list()?;
    let mut result = CmdResult::default();
    if movies.is_empty() {
        result.add_message(CmdMessage::info("No movies in the catalog yet."));
    }
    Ok(result.with_listed_movies(movies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_store;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_in_stored_order() {
        let catalog = Catalog::new(sample_store());
        let result = run(&catalog).unwrap();

        let titles: Vec<_> = result.listed_movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Room", "Heat", "Alien", "The Godfather"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_catalog_says_so() {
        let catalog = Catalog::new(InMemoryStore::new());
        let result = run(&catalog).unwrap();
        assert!(result.listed_movies.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
