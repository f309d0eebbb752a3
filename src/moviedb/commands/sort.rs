use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::query::{sort_by, SortField, SortOrder};
use crate::store::MovieStore;

pub fn run<S: MovieStore>(
    catalog: &Catalog<S>,
    field: SortField,
    order: SortOrder,
) -> Result<CmdResult> {
    let sorted = sort_by(&catalog.list()?, field, order);
    Ok(CmdResult::default().with_listed_movies(sorted))
}
