use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;

pub fn run<S: MovieStore>(catalog: &Catalog<S>, title: &str) -> Result<CmdResult> {
    let removed = catalog.delete(title)?;
    let message = if removed == 0 {
        CmdMessage::warning(format!("Movie '{}' doesn't exist", title))
    } else {
        CmdMessage::success(format!("Movie '{}' successfully deleted", title))
    };
    Ok(CmdResult::default().with_message(message))
}
