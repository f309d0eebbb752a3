use crate::error::{MovieDbError, Result};
use crate::model::Movie;
use serde::Serialize;

/// Fewest movies statistics are computed for.
pub const MIN_MOVIES_FOR_STATS: usize = 2;

/// Aggregate rating statistics over a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieStats {
    pub average: f64,
    pub median: f64,
    pub best_rating: f64,
    pub worst_rating: f64,
    /// Every title tied at `best_rating`, in catalog order.
    pub best_titles: Vec<String>,
    /// Every title tied at `worst_rating`, in catalog order.
    pub worst_titles: Vec<String>,
}

pub fn compute_stats(movies: &[Movie]) -> Result<MovieStats> {
    if movies.len() < MIN_MOVIES_FOR_STATS {
        return Err(MovieDbError::InsufficientData {
            found: movies.len(),
            required: MIN_MOVIES_FOR_STATS,
        });
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(f64::total_cmp);

    let average = ratings.iter().sum::<f64>() / ratings.len() as f64;
    let mid = ratings.len() / 2;
    let median = if ratings.len() % 2 == 0 {
        (ratings[mid - 1] + ratings[mid]) / 2.0
    } else {
        ratings[mid]
    };
    let worst_rating = ratings[0];
    let best_rating = ratings[ratings.len() - 1];

    let titles_rated = |rating: f64| -> Vec<String> {
        movies
            .iter()
            .filter(|m| m.rating == rating)
            .map(|m| m.title.clone())
            .collect()
    };

    Ok(MovieStats {
        average,
        median,
        best_rating,
        worst_rating,
        best_titles: titles_rated(best_rating),
        worst_titles: titles_rated(worst_rating),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_movies;

    #[test]
    fn computes_stats_for_sample() {
        let stats = compute_stats(&sample_movies()).unwrap();
        assert_eq!(stats.average, 6.75);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.best_rating, 10.0);
        assert_eq!(stats.best_titles, vec!["The Godfather"]);
        assert_eq!(stats.worst_rating, 3.0);
        assert_eq!(stats.worst_titles, vec!["The Room"]);
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        let movies = vec![
            Movie::new("A", 2000, 9.0),
            Movie::new("B", 2000, 1.0),
            Movie::new("C", 2000, 4.0),
        ];
        assert_eq!(compute_stats(&movies).unwrap().median, 4.0);
    }

    #[test]
    fn reports_all_tied_titles() {
        let movies = vec![
            Movie::new("A", 2000, 8.0),
            Movie::new("B", 2000, 2.0),
            Movie::new("C", 2000, 8.0),
            Movie::new("D", 2000, 2.0),
        ];
        let stats = compute_stats(&movies).unwrap();
        assert_eq!(stats.best_titles, vec!["A", "C"]);
        assert_eq!(stats.worst_titles, vec!["B", "D"]);
    }

    #[test]
    fn insufficient_data() {
        for movies in [vec![], vec![Movie::new("Solo", 2018, 6.9)]] {
            let err = compute_stats(&movies).unwrap_err();
            assert!(matches!(
                err,
                MovieDbError::InsufficientData { required: 2, .. }
            ));
        }
    }
}
