//! # Metadata lookup
//!
//! Resolves a free-text title to the fields moviedb stores. [`MetadataSource`]
//! is the seam: production code uses [`OmdbClient`], tests use a stub.
//!
//! The OMDb client retries transient failures (timeouts, connection errors and
//! HTTP 429/500/502/503/504) up to three times, waiting 1s, 2s and 4s.

use crate::error::{MovieDbError, Result};
use crate::model::{coerce_rating, NewMovie};
use serde::Deserialize;
use std::thread;
use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

pub const OMDB_URL: &str = "http://www.omdbapi.com/";
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_RETRIES: usize = 3;
const RETRY_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];
const NOT_AVAILABLE: &str = "N/A";

/// Movie fields resolved by a lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedMovie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: Option<String>,
    pub imdb_id: Option<String>,
}

impl FetchedMovie {
    pub fn into_new_movie(self) -> NewMovie {
        NewMovie::new(self.title, self.year, self.rating)
            .with_poster(self.poster)
            .with_external_id(self.imdb_id)
    }
}

pub trait MetadataSource {
    /// Look up `title`. `Ok(None)` means the service has no such movie.
    fn lookup(&self, title: &str) -> Result<Option<FetchedMovie>>;
}

/// Raw OMDb payload. Every value arrives as a string.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbResponse {
    fn into_fetched(self, query: &str) -> Result<Option<FetchedMovie>> {
        if self.response != "True" {
            log::info!(
                "OMDb has no match for '{}': {}",
                query,
                self.error.as_deref().unwrap_or("unknown error")
            );
            return Ok(None);
        }

        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| MovieDbError::Lookup(format!("response for '{}' has no title", query)))?;

        let year = self
            .year
            .as_deref()
            .and_then(leading_year)
            .ok_or_else(|| {
                MovieDbError::Lookup(format!("response for '{}' has no usable year", title))
            })?;

        let rating = match self.imdb_rating.as_deref().and_then(coerce_rating) {
            Some(rating) => rating,
            None => {
                log::warn!("No rating available for '{}', storing 0", title);
                0.0
            }
        };

        Ok(Some(FetchedMovie {
            title,
            year,
            rating,
            poster: available(self.poster),
            imdb_id: available(self.imdb_id),
        }))
    }
}

fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != NOT_AVAILABLE)
}

/// First run of four digits, so `"2010–2013"` gives 2010.
fn leading_year(raw: &str) -> Option<i32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

enum Attempt {
    Transient(MovieDbError),
    Fatal(MovieDbError),
}

/// Blocking client for the OMDb API.
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: OMDB_URL.to_string(),
        })
    }

    fn request(&self, title: &str) -> std::result::Result<OmdbResponse, Attempt> {
        let resp = self
            .http
            .get(&self.base_url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    Attempt::Transient(MovieDbError::Http(e))
                } else {
                    Attempt::Fatal(MovieDbError::Http(e))
                }
            })?;

        let status = resp.status();
        if RETRY_STATUSES.contains(&status.as_u16()) {
            return Err(Attempt::Transient(MovieDbError::Lookup(format!(
                "OMDb answered HTTP {}",
                status
            ))));
        }
        if !status.is_success() {
            return Err(Attempt::Fatal(MovieDbError::Lookup(format!(
                "OMDb answered HTTP {}",
                status
            ))));
        }

        resp.json::<OmdbResponse>()
            .map_err(|e| Attempt::Fatal(MovieDbError::Http(e)))
    }
}

/// Delays between attempts: 1s, 2s, 4s.
fn retry_delays() -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(500)
        .take(MAX_RETRIES)
}

impl MetadataSource for OmdbClient {
    fn lookup(&self, title: &str) -> Result<Option<FetchedMovie>> {
        let mut delays = retry_delays();
        loop {
            match self.request(title) {
                Ok(response) => return response.into_fetched(title),
                Err(Attempt::Fatal(e)) => return Err(e),
                Err(Attempt::Transient(e)) => match delays.next() {
                    Some(delay) => {
                        log::warn!("OMDb lookup for '{}' failed ({}), retrying in {:?}", title, e, delay);
                        thread::sleep(delay);
                    }
                    None => return Err(e),
                },
            }
        }
    }
}

/// Builds the OMDb client. `OMDB_API_KEY` wins over the configured key.
pub fn omdb_from_key(configured: Option<&str>) -> Result<OmdbClient> {
    let key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            MovieDbError::Config(format!(
                "No OMDb API key configured. Set {} or run `moviedb config api-key <key>`",
                API_KEY_ENV
            ))
        })?;
    OmdbClient::new(key)
}
