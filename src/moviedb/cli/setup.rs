use chrono::Datelike;
use clap::{Parser, Subcommand};
use moviedb::store::StorageKind;
use std::path::PathBuf;

pub const MAX_RATING: f64 = 10.0;

#[derive(Parser, Debug)]
#[command(name = "moviedb", bin_name = "moviedb", version)]
#[command(about = "Keep your movie catalog in a JSON or CSV file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Store the catalog as JSON (the default)
    #[arg(long, global = true, conflicts_with = "csv", help_heading = "Storage")]
    pub json: bool,

    /// Store the catalog as CSV
    #[arg(long, global = true, help_heading = "Storage")]
    pub csv: bool,

    /// Data file name, without extension
    #[arg(short, long, global = true, help_heading = "Storage")]
    pub name: Option<String>,

    /// Directory holding the data file
    #[arg(long, global = true, value_name = "DIR", help_heading = "Storage")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

impl Cli {
    /// Backend requested on the command line, if any.
    pub fn storage(&self) -> Option<StorageKind> {
        if self.csv {
            Some(StorageKind::Csv)
        } else if self.json {
            Some(StorageKind::Json)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all movies
    #[command(alias = "ls")]
    List,

    /// Add a movie; without --year and --rating the details come from OMDb
    Add {
        title: String,

        #[arg(long, value_parser = parse_year)]
        year: Option<i32>,

        #[arg(long, value_parser = parse_rating)]
        rating: Option<f64>,

        /// Poster URL
        #[arg(long)]
        poster: Option<String>,

        /// IMDb id, e.g. tt0113277
        #[arg(long)]
        id: Option<String>,
    },

    /// Delete a movie by title
    #[command(alias = "rm")]
    Delete { title: String },

    /// Change the rating of a movie
    Update {
        title: String,

        #[arg(value_parser = parse_rating)]
        rating: f64,
    },

    /// Average, median, best and worst ratings
    Stats,

    /// Pick a random movie
    Random,

    /// Search titles, tolerating typos
    Search { query: String },

    /// List movies sorted by a field
    Sort {
        #[arg(value_parser = ["title", "year", "rating"])]
        field: String,

        /// Defaults to desc
        #[arg(value_parser = ["asc", "desc"])]
        order: Option<String>,
    },

    /// List movies within rating and year bounds
    Filter {
        #[arg(long, value_parser = parse_rating)]
        min_rating: Option<f64>,

        #[arg(long, value_parser = parse_year)]
        start_year: Option<i32>,

        #[arg(long, value_parser = parse_year)]
        end_year: Option<i32>,
    },

    /// Generate a static HTML page of the catalog
    Website {
        /// Page heading
        #[arg(long)]
        heading: Option<String>,

        /// Output file (defaults to the configured website-output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Open the interactive menu
    Menu,

    /// Get or set configuration
    Config {
        /// Configuration key (storage, name, api-key, website-output, template-dir)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Accepts years from 0 up to the current year.
pub fn parse_year(raw: &str) -> Result<i32, String> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a year", raw.trim()))?;
    let max = current_year();
    if !(0..=max).contains(&year) {
        return Err(format!("Year must be between 0 and {}", max));
    }
    Ok(year)
}

/// Accepts ratings from 0 to 10, decimals allowed.
pub fn parse_rating(raw: &str) -> Result<f64, String> {
    let rating: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(format!("Rating must be between 0 and {}", MAX_RATING));
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["moviedb"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.storage(), None);
    }

    #[test]
    fn test_global_storage_flags() {
        let cli = Cli::try_parse_from(["moviedb", "list", "--csv", "-n", "films"]).unwrap();
        assert_eq!(cli.storage(), Some(StorageKind::Csv));
        assert_eq!(cli.name.as_deref(), Some("films"));
        assert!(Cli::try_parse_from(["moviedb", "--json", "--csv", "list"]).is_err());
    }

    #[test]
    fn test_add_with_details() {
        let cli = Cli::try_parse_from([
            "moviedb", "add", "Heat", "--year", "1995", "--rating", "8.3",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                year,
                rating,
                ..
            }) => {
                assert_eq!(title, "Heat");
                assert_eq!(year, Some(1995));
                assert_eq!(rating, Some(8.3));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["moviedb", "update", "Heat", "11"]).is_err());
        assert!(Cli::try_parse_from(["moviedb", "update", "Heat", "-1"]).is_err());
    }

    #[test]
    fn test_sort_field_is_checked() {
        assert!(Cli::try_parse_from(["moviedb", "sort", "year", "asc"]).is_ok());
        assert!(Cli::try_parse_from(["moviedb", "sort", "genre"]).is_err());
    }

    #[test]
    fn test_parse_year_bounds() {
        assert_eq!(parse_year("1995"), Ok(1995));
        assert_eq!(parse_year("0"), Ok(0));
        assert!(parse_year("-5").is_err());
        assert!(parse_year(&(current_year() + 1).to_string()).is_err());
        assert!(parse_year("nineteen").is_err());
    }

    #[test]
    fn test_parse_rating_bounds() {
        assert_eq!(parse_rating(" 7.5 "), Ok(7.5));
        assert_eq!(parse_rating("10"), Ok(10.0));
        assert!(parse_rating("10.1").is_err());
        assert!(parse_rating("NaN").is_err());
    }
}
