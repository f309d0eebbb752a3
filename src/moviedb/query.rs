//! Sorting and filtering over a snapshot of movies.
//!
//! Descending order is produced by sorting ascending (stable) and reversing the
//! result. Movies that compare equal therefore come out in the reverse of their
//! catalog order under `Desc`, and in catalog order under `Asc`.

use crate::error::{MovieDbError, Result};
use crate::model::Movie;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Year,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortField {
    type Err = MovieDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SortField::Title),
            "year" => Ok(SortField::Year),
            "rating" => Ok(SortField::Rating),
            other => Err(MovieDbError::Api(format!(
                "Wrong sort field '{}' (expected title, year or rating)",
                other
            ))),
        }
    }
}

impl FromStr for SortOrder {
    type Err = MovieDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(MovieDbError::Api(format!(
                "Wrong order argument '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Title => "title",
            SortField::Year => "year",
            SortField::Rating => "rating",
        })
    }
}

fn compare(a: &Movie, b: &Movie, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Year => a.year.cmp(&b.year),
        SortField::Rating => a.rating.total_cmp(&b.rating),
    }
}

pub fn sort_by(movies: &[Movie], field: SortField, order: SortOrder) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| compare(a, b, field));
    if order == SortOrder::Desc {
        sorted.reverse();
    }
    sorted
}

/// Inclusive bounds; `None` means unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFilter {
    pub min_rating: Option<f64>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

impl MovieFilter {
    pub fn matches(&self, movie: &Movie) -> bool {
        self.min_rating.map_or(true, |min| movie.rating >= min)
            && self.start_year.map_or(true, |start| movie.year >= start)
            && self.end_year.map_or(true, |end| movie.year <= end)
    }
}

pub fn filter(movies: &[Movie], filter: &MovieFilter) -> Vec<Movie> {
    movies.iter().filter(|m| filter.matches(m)).cloned().collect()
}
