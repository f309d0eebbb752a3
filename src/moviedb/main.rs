//! The `moviedb` binary. All terminal concerns live in `cli/`; this file only
//! runs it and turns an error into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(1);
    }
}
