use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::{filter, MovieFilter};
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>, criteria: &MovieFilter) -> Result<CmdResult> {
    let matching = filter(&catalog.list()?, criteria);
    let mut result = CmdResult::default();
    if matching.is_empty() {
        result.add_message(CmdMessage::info("No movies match the filter"));
    }
    Ok(result.with_listed_movies(matching))
}
