//! Interactive menu, shown when `moviedb` runs without a subcommand.
//!
//! Each item reuses the subcommand handlers. Prompts re-ask until the input
//! is valid; end of input leaves the menu.

use super::commands::{
    handle_add, handle_delete, handle_filter, handle_list, handle_random, handle_search,
    handle_sort, handle_stats, handle_update, handle_website, AppContext,
};
use super::print::{print_messages, report_error};
use super::setup::{parse_rating, parse_year};
use colored::Colorize;
use moviedb::error::{MovieDbError, Result};
use moviedb::fetch::omdb_from_key;
use moviedb::model::NewMovie;
use moviedb::query::MovieFilter;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Exit,
    List,
    Add,
    Delete,
    Stats,
    Random,
    Search,
    SortedByRating,
    SortedByYear,
    Filter,
    Website,
    Update,
}

/// Menu entries; the position is the number the user types.
const MENU: [(MenuItem, &str); 12] = [
    (MenuItem::Exit, "Exit"),
    (MenuItem::List, "List movies"),
    (MenuItem::Add, "Add movie"),
    (MenuItem::Delete, "Delete movie"),
    (MenuItem::Stats, "Stats"),
    (MenuItem::Random, "Random movie"),
    (MenuItem::Search, "Search movie"),
    (MenuItem::SortedByRating, "Movies sorted by rating"),
    (MenuItem::SortedByYear, "Movies sorted by year"),
    (MenuItem::Filter, "Filter movies"),
    (MenuItem::Website, "Generate website"),
    (MenuItem::Update, "Update movie rating"),
];

fn parse_choice(raw: &str) -> std::result::Result<MenuItem, String> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| MENU.get(n))
        .map(|(item, _)| *item)
        .ok_or_else(|| format!("Enter a number between 0 and {}", MENU.len() - 1))
}

fn parse_title(raw: &str) -> std::result::Result<String, String> {
    let title = raw.trim();
    if title.is_empty() {
        Err("Title cannot be empty".to_string())
    } else {
        Ok(title.to_string())
    }
}

fn parse_query(raw: &str) -> std::result::Result<String, String> {
    let query = raw.trim();
    if query.is_empty() {
        Err("Search text cannot be empty".to_string())
    } else {
        Ok(query.to_string())
    }
}

fn parse_yes_no(raw: &str) -> std::result::Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("Answer Y or N".to_string()),
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub(super) struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// One trimmed line, `None` at end of input.
    fn line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn validated<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, String>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(raw) = self.line(prompt)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => writeln!(self.output, "{}", msg.red())?,
            }
        }
    }

    /// Like `validated`, but a blank answer means "no value".
    fn optional<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, String>,
    ) -> io::Result<Option<Option<T>>> {
        self.validated(prompt, |raw| {
            if raw.trim().is_empty() {
                Ok(None)
            } else {
                parse(raw).map(Some)
            }
        })
    }

    fn title(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.validated(prompt, parse_title)
    }

    fn year(&mut self, prompt: &str) -> io::Result<Option<i32>> {
        self.validated(prompt, parse_year)
    }

    fn rating(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.validated(prompt, parse_rating)
    }

    fn choice(&mut self) -> io::Result<Option<MenuItem>> {
        self.validated(&format!("\nEnter choice (0-{}): ", MENU.len() - 1), parse_choice)
    }
}

fn print_menu() {
    println!("\n{}", "Menu:".bold());
    for (number, (_, label)) in MENU.iter().enumerate() {
        println!("{:>3}. {}", number, label);
    }
}

pub(super) fn run(ctx: &AppContext) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    println!("{}", "********** My Movies Database **********".bold());
    loop {
        print_menu();
        let Some(item) = prompter.choice()? else {
            break;
        };
        if item == MenuItem::Exit {
            println!("Bye!");
            break;
        }

        match perform(ctx, &mut prompter, item) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => report_error(&e),
        }

        if prompter.line("\nPress enter to continue")?.is_none() {
            break;
        }
    }
    Ok(())
}

/// Runs one menu item. `Ok(false)` means input ended mid-prompt.
fn perform<R: BufRead, W: Write>(
    ctx: &AppContext,
    p: &mut Prompter<R, W>,
    item: MenuItem,
) -> Result<bool> {
    match item {
        MenuItem::Exit => return Ok(false),
        MenuItem::List => handle_list(ctx)?,
        MenuItem::Add => {
            let Some(title) = p.title("Enter new movie name: ")? else {
                return Ok(false);
            };
            match omdb_from_key(ctx.config.api_key.as_deref()) {
                Ok(source) => {
                    let result = ctx.api.fetch_and_add(&source, &title)?;
                    print_messages(&result.messages);
                }
                Err(MovieDbError::Config(msg)) => {
                    println!("{}", msg.yellow());
                    let Some(year) = p.year("Enter movie year: ")? else {
                        return Ok(false);
                    };
                    let Some(rating) = p.rating("Enter movie rating (0-10): ")? else {
                        return Ok(false);
                    };
                    handle_add(ctx, NewMovie::new(title, year, rating))?;
                }
                Err(e) => return Err(e),
            }
        }
        MenuItem::Delete => {
            let Some(title) = p.title("Enter movie name to delete: ")? else {
                return Ok(false);
            };
            handle_delete(ctx, &title)?;
        }
        MenuItem::Update => {
            let Some(title) = p.title("Enter movie name: ")? else {
                return Ok(false);
            };
            let Some(rating) = p.rating("Enter new movie rating (0-10): ")? else {
                return Ok(false);
            };
            handle_update(ctx, &title, rating)?;
        }
        MenuItem::Stats => handle_stats(ctx)?,
        MenuItem::Random => handle_random(ctx)?,
        MenuItem::Search => {
            let Some(query) = p.validated("Enter part of movie name: ", parse_query)? else {
                return Ok(false);
            };
            handle_search(ctx, &query)?;
        }
        MenuItem::SortedByRating => handle_sort(ctx, "rating", Some("desc"))?,
        MenuItem::SortedByYear => {
            let Some(latest_first) =
                p.validated("Do you want the latest movies first? (Y/N): ", parse_yes_no)?
            else {
                return Ok(false);
            };
            let order = if latest_first { "desc" } else { "asc" };
            handle_sort(ctx, "year", Some(order))?;
        }
        MenuItem::Filter => {
            let Some(min_rating) =
                p.optional("Minimum rating (leave blank for no minimum): ", parse_rating)?
            else {
                return Ok(false);
            };
            let Some(start_year) =
                p.optional("Start year (leave blank for no start year): ", parse_year)?
            else {
                return Ok(false);
            };
            let Some(end_year) =
                p.optional("End year (leave blank for no end year): ", parse_year)?
            else {
                return Ok(false);
            };
            handle_filter(
                ctx,
                &MovieFilter {
                    min_rating,
                    start_year,
                    end_year,
                },
            )?;
        }
        MenuItem::Website => handle_website(ctx, None, None)?,
    }
    Ok(true)
}
