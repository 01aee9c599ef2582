pub mod similarity;
pub mod text;
pub mod tfidf;

use crate::dataset::Movie;
use similarity::SimilarityMatrix;
use tfidf::VectorSpace;

/// Blend weight of overview-based similarity in the combined score.
pub const OVERVIEW_WEIGHT: f64 = 0.7;
/// Blend weight of genre-based similarity in the combined score.
pub const GENRE_WEIGHT: f64 = 0.3;
/// Number of titles a recommendation query returns.
pub const RECOMMENDATION_COUNT: usize = 5;

/// Precomputed recommendation engine: the movie catalog plus the blended
/// all-pairs similarity matrix.
///
/// Built once before the server starts accepting requests; every query
/// afterwards is a pure read against this snapshot, so any number of
/// handlers can share it without coordination.
pub struct Engine {
    movies: Vec<Movie>,
    similarity: SimilarityMatrix,
}

impl Engine {
    /// Fits a TF-IDF vector space per text attribute and derives the
    /// combined similarity matrix.
    pub fn build(movies: Vec<Movie>) -> Self {
        let overviews = VectorSpace::fit(movies.iter().map(|m| m.overview.as_str()));
        let genres = VectorSpace::fit(movies.iter().map(|m| m.genre_terms.as_str()));
        tracing::info!(
            movies = movies.len(),
            overview_terms = overviews.vocabulary_size(),
            genre_terms = genres.vocabulary_size(),
            "fitted vector spaces"
        );

        let similarity = SimilarityMatrix::from_unit_vectors(overviews.vectors()).blend(
            &SimilarityMatrix::from_unit_vectors(genres.vectors()),
            OVERVIEW_WEIGHT,
            GENRE_WEIGHT,
        );

        Self { movies, similarity }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn movie(&self, id: usize) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The combined similarity matrix.
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Case-insensitive substring match over titles, in catalog order.
    pub fn find_by_title(&self, query: &str) -> Vec<&Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// The `count` movies most similar to `movie_id`, best first.
    ///
    /// Equal scores tie-break on ascending id so repeated queries return
    /// the same order. The query movie itself is excluded by id rather
    /// than positionally: with exact ties at 1.0 it is not guaranteed to
    /// sort first. Returns `None` when `movie_id` is not a catalog id.
    pub fn recommend(&self, movie_id: usize, count: usize) -> Option<Vec<&Movie>> {
        if movie_id >= self.movies.len() {
            return None;
        }

        let mut scored: Vec<(usize, f64)> = self
            .similarity
            .row(movie_id)
            .iter()
            .copied()
            .enumerate()
            .filter(|&(id, _)| id != movie_id)
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        Some(
            scored
                .into_iter()
                .take(count)
                .map(|(id, _)| &self.movies[id])
                .collect(),
        )
    }
}
