use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::MovieStore;
use crate::website::generate_website;
use std::path::Path;

pub fn run<S: MovieStore>(
    catalog: &Catalog<S>,
    heading: &str,
    template_dir: Option<&Path>,
    output: &Path,
) -> Result<CmdResult> {
    let movies = catalog.list()?;
    let written = generate_website(&movies, heading, template_dir, output)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Website was generated successfully: {}",
            written.display()
        )))
        .with_output_path(written))
}
