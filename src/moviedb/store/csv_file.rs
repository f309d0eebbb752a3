use super::{read_existing, validate_loaded, write_atomic, MovieStore};
use crate::error::{MovieDbError, Result};
use crate::model::{coerce_rating, coerce_year, Movie};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::path::{Path, PathBuf};

/// Column order used when writing. `ID` is optional when reading.
pub const CSV_HEADER: [&str; 5] = ["Title", "Rating", "Year", "Poster", "ID"];
const REQUIRED_COLUMNS: [&str; 4] = ["Title", "Rating", "Year", "Poster"];

/// Stores the catalog as a CSV table.
pub struct CsvStore {
    path: PathBuf,
}

/// Positions of each known column in the file's header row.
struct Columns {
    title: usize,
    rating: usize,
    year: usize,
    poster: usize,
    id: Option<usize>,
}

impl Columns {
    fn from_header(path: &Path, header: &StringRecord) -> Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);

        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| find(c).is_none()) {
            return Err(MovieDbError::corrupt(
                path,
                format!("missing required column '{}'", missing),
            ));
        }

        Ok(Self {
            title: find("Title").unwrap_or_default(),
            rating: find("Rating").unwrap_or_default(),
            year: find("Year").unwrap_or_default(),
            poster: find("Poster").unwrap_or_default(),
            id: find("ID"),
        })
    }
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn bootstrap(&self) -> Result<()> {
        log::debug!("Creating empty CSV catalog at {}", self.path.display());
        self.save_all(&[])
    }

    fn parse(&self, content: &str) -> Result<Vec<Movie>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let header = reader
            .headers()
            .map_err(|e| MovieDbError::corrupt(&self.path, e.to_string()))?
            .clone();
        let columns = Columns::from_header(&self.path, &header)?;

        let mut movies = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| MovieDbError::corrupt(&self.path, e.to_string()))?;
            movies.push(self.parse_row(i + 1, &record, &columns)?);
        }
        Ok(movies)
    }

    fn parse_row(&self, row: usize, record: &StringRecord, columns: &Columns) -> Result<Movie> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let year = coerce_year(field(columns.year)).ok_or_else(|| {
            MovieDbError::corrupt(
                &self.path,
                format!("row {}: invalid year {:?}", row, field(columns.year)),
            )
        })?;
        let rating = coerce_rating(field(columns.rating)).ok_or_else(|| {
            MovieDbError::corrupt(
                &self.path,
                format!("row {}: invalid rating {:?}", row, field(columns.rating)),
            )
        })?;

        let mut movie = Movie::new(field(columns.title), year, rating);
        movie.poster = field(columns.poster).to_string();
        movie.external_id = columns
            .id
            .map(field)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        Ok(movie)
    }

    fn serialize(&self, movies: &[Movie]) -> Result<Vec<u8>> {
        let to_write_err = |e: csv::Error| {
            MovieDbError::write(&self.path, std::io::Error::other(e.to_string()))
        };

        let mut writer = WriterBuilder::new().from_writer(Vec::new());
        writer.write_record(CSV_HEADER).map_err(to_write_err)?;
        for movie in movies {
            writer
                .write_record([
                    movie.title.clone(),
                    movie.rating.to_string(),
                    movie.year.to_string(),
                    movie.poster.clone(),
                    movie.external_id.clone().unwrap_or_default(),
                ])
                .map_err(to_write_err)?;
        }
        writer
            .into_inner()
            .map_err(|e| MovieDbError::write(&self.path, std::io::Error::other(e.to_string())))
    }
}

impl MovieStore for CsvStore {
    fn load_all(&self) -> Result<Vec<Movie>> {
        let Some(content) = read_existing(&self.path)? else {
            self.bootstrap()?;
            return Ok(Vec::new());
        };

        let movies = self.parse(&content)?;
        validate_loaded(&self.path, &movies)?;

        log::debug!("Loaded {} movies from {}", movies.len(), self.path.display());
        Ok(movies)
    }

    fn save_all(&self, movies: &[Movie]) -> Result<()> {
        let bytes = self.serialize(movies)?;
        write_atomic(&self.path, &bytes)?;
        log::debug!("Saved {} movies to {}", movies.len(), self.path.display());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
