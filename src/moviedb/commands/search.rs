use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::search;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>, query: &str) -> Result<CmdResult> {
    let results = search(&catalog.list()?, query);
    let mut result = CmdResult::default();
    if results.is_empty() {
        result.add_message(CmdMessage::info(format!("No movies match '{}'", query)));
    }
    Ok(result.with_search(results))
}
