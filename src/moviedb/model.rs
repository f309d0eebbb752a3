use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Stored in place of a poster URL when none is known.
pub const POSTER_PLACEHOLDER: &str = "placeholder";

/// A single catalog entry.
///
/// Serialized field names match the on-disk formats (`Title`, `Rating`,
/// `Year`, `Poster`, `ID`). Numeric fields are coerced on read, so a file
/// holding `"Year": "1997"` loads the same as one holding `"Year": 1997`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Rating", deserialize_with = "deserialize_rating")]
    pub rating: f64,
    #[serde(rename = "Year", deserialize_with = "deserialize_year")]
    pub year: i32,
    // Older files wrote a lowercase key
    #[serde(rename = "Poster", alias = "poster", default = "default_poster")]
    pub poster: String,
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
            year,
            poster: default_poster(),
            external_id: None,
        }
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = poster.into();
        self
    }

    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    pub fn has_poster(&self) -> bool {
        self.poster != POSTER_PLACEHOLDER && !self.poster.is_empty()
    }

    /// Compares titles, optionally ignoring case.
    pub fn title_matches(&self, title: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.title == title
        } else {
            self.title.to_lowercase() == title.to_lowercase()
        }
    }
}

/// Fields for a movie that is about to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: Option<String>,
    pub external_id: Option<String>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        Self {
            title: title.into(),
            year,
            rating,
            poster: None,
            external_id: None,
        }
    }

    pub fn with_poster(mut self, poster: Option<String>) -> Self {
        self.poster = poster;
        self
    }

    pub fn with_external_id(mut self, id: Option<String>) -> Self {
        self.external_id = id;
        self
    }

    pub fn into_movie(self) -> Movie {
        let poster = self
            .poster
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(default_poster);
        Movie {
            title: self.title,
            rating: self.rating,
            year: self.year,
            poster,
            external_id: self.external_id.filter(|id| !id.trim().is_empty()),
        }
    }
}

fn default_poster() -> String {
    POSTER_PLACEHOLDER.to_string()
}

/// Parses a year from text. Accepts `"1997"` and integral floats like `"1997.0"`.
pub fn coerce_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    raw.parse::<f64>().ok().and_then(year_from_float)
}

/// Parses a rating from text.
pub fn coerce_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

fn year_from_float(value: f64) -> Option<i32> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        Some(value as i32)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => {
            i32::try_from(n).map_err(|_| D::Error::custom(format!("year out of range: {}", n)))
        }
        RawNumber::Float(f) => {
            year_from_float(f).ok_or_else(|| D::Error::custom(format!("invalid year: {}", f)))
        }
        RawNumber::Text(s) => {
            coerce_year(&s).ok_or_else(|| D::Error::custom(format!("invalid year: {:?}", s)))
        }
    }
}

fn deserialize_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => Ok(n as f64),
        RawNumber::Float(f) => Ok(f),
        RawNumber::Text(s) => {
            coerce_rating(&s).ok_or_else(|| D::Error::custom(format!("invalid rating: {:?}", s)))
        }
    }
}
