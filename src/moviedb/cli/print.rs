use colored::Colorize;
use moviedb::api::{CmdMessage, MessageLevel};
use moviedb::config::{MovieDbConfig, CONFIG_KEYS};
use moviedb::error::MovieDbError;
use moviedb::model::Movie;
use moviedb::search::SearchResults;
use moviedb::stats::MovieStats;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_TITLE_WIDTH: usize = 50;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_movies(movies: &[Movie]) {
    if movies.is_empty() {
        return;
    }

    let title_width = movies
        .iter()
        .map(|m| m.title.width())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    println!("{}", format!("{} movies in total", movies.len()).bold());
    for movie in movies {
        println!(
            "  {}  {}  {}",
            title_cell(&movie.title, title_width),
            format!("({})", movie.year).dimmed(),
            format_rating(movie.rating).yellow()
        );
    }
}

pub(super) fn print_movie(movie: &Movie) {
    println!(
        "{} {}, it's rated {}",
        movie.title.bold(),
        format!("({})", movie.year).dimmed(),
        format_rating(movie.rating).yellow()
    );
}

pub(super) fn print_stats(stats: &MovieStats) {
    println!("Average rating: {}", format!("{:.2}", stats.average).yellow());
    println!("Median rating:  {}", format!("{:.2}", stats.median).yellow());
    println!(
        "Best movie{}:    {} ({})",
        plural(stats.best_titles.len()),
        stats.best_titles.join(", ").green(),
        format_rating(stats.best_rating)
    );
    println!(
        "Worst movie{}:   {} ({})",
        plural(stats.worst_titles.len()),
        stats.worst_titles.join(", ").red(),
        format_rating(stats.worst_rating)
    );
}

pub(super) fn print_search(results: &SearchResults) {
    if !results.fuzzy.is_empty() {
        println!("{}", "Closest matches:".bold());
        for hit in &results.fuzzy {
            println!("  {} {}", hit.title, format!("[{}%]", hit.score).dimmed());
        }
    }
    if !results.substring.is_empty() {
        println!("{}", "Titles containing the query:".bold());
        for title in &results.substring {
            println!("  {}", title);
        }
    }
}

pub(super) fn print_config(config: &MovieDbConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

/// Prints a failed operation to stderr.
pub fn report_error(error: &MovieDbError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
    if let MovieDbError::StorageWrite { path, .. } = error {
        eprintln!(
            "{}",
            format!(
                "Warning: {} may not reflect the last change; check it before continuing.",
                path.display()
            )
            .yellow()
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// `title` truncated or padded to exactly `width` columns.
fn title_cell(title: &str, width: usize) -> String {
    let shown = if title.width() > width {
        truncate_to_width(title, width)
    } else {
        title.to_string()
    };
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
