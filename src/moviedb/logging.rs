/// Installs the `env_logger` backend.
///
/// Warnings and errors only by default, everything from debug up with
/// `--verbose`. `RUST_LOG` always has the last word.
pub fn setup_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    builder.filter(None, level);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.format_timestamp(None);
    let _ = builder.try_init();
}
