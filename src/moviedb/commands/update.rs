use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>, title: &str, rating: f64) -> Result<CmdResult> {
    let updated = catalog.update(title, rating)?;
    if updated == 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Movie '{}' doesn't exist",
            title
        ))));
    }

    let movies = catalog
        .list()?
        .into_iter()
        .filter(|m| m.title_matches(title, false))
        .collect();
    Ok(CmdResult::default()
        .with_affected_movies(movies)
        .with_message(CmdMessage::success(format!(
            "Rating of '{}' set to {}",
            title, rating
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::sample_store;

    #[test]
    fn updates_rating() {
        let catalog = Catalog::new(sample_store());
        let result = run(&catalog, "heat", 9.5).unwrap();

        assert_eq!(result.affected_movies.len(), 1);
        assert_eq!(result.affected_movies[0].rating, 9.5);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn unknown_title_warns_and_changes_nothing() {
        let catalog = Catalog::new(sample_store());
        let before = catalog.list().unwrap();

        let result = run(&catalog, "Nope", 1.0).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(catalog.list().unwrap(), before);
    }
}
