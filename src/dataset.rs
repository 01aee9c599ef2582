use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One catalog row as stored in the dataset file. Columns beyond these
/// are ignored; `overview` and `genre` may be absent.
#[derive(Debug, Deserialize)]
struct MovieRecord {
    original_title: String,
    release_date: String,
    vote_count: i64,
    #[serde(default)]
    overview: String,
    #[serde(default)]
    genre: String,
}

/// A catalog movie.
///
/// `id` is the movie's dense row index, assigned in file order at load
/// time: ids are exactly `0..N-1`, never reused or reassigned, and serve
/// as the key for both the similarity matrix and the HTTP surface. The
/// whole catalog is a read-only snapshot for the process lifetime.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Movie {
    pub id: usize,
    pub title: String,
    /// Opaque to the engine; surfaced verbatim to clients.
    pub release_date: String,
    pub vote_count: i64,
    pub overview: String,
    /// Raw genre list as stored in the dataset, e.g. `"['Action', 'Drama']"`.
    pub genre: String,
    /// `genre` flattened to space-separated terms for vectorization.
    #[serde(skip)]
    pub genre_terms: String,
}

impl Movie {
    /// Creates a movie, deriving its normalized genre terms.
    pub fn new(
        id: usize,
        title: String,
        release_date: String,
        vote_count: i64,
        overview: String,
        genre: String,
    ) -> Self {
        let genre_terms = normalize_genres(&genre);
        Self {
            id,
            title,
            release_date,
            vote_count,
            overview,
            genre,
            genre_terms,
        }
    }
}

/// Flattens a bracketed, quoted genre list into space-separated terms:
/// `"['Science Fiction', 'Action']"` becomes `"Science Fiction Action"`.
///
/// Empty input stays empty, and a bare unbracketed term passes through
/// trimmed. Total over all strings; never fails.
pub fn normalize_genres(raw: &str) -> String {
    let stripped: String = raw
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .chars()
        .filter(|&c| c != '\'' && c != '"')
        .collect();
    stripped
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads the catalog CSV, assigning ids in file order.
///
/// A missing or unparsable file is fatal; there is no degraded mode.
pub fn load_movies<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Movie>> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    read_movies(reader)
}

fn read_movies<R: std::io::Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<Movie>> {
    let mut movies = Vec::new();
    for (id, record) in reader.deserialize().enumerate() {
        let record: MovieRecord =
            record.with_context(|| format!("failed to parse dataset row {id}"))?;
        movies.push(Movie::new(
            id,
            record.original_title,
            record.release_date,
            record.vote_count,
            record.overview,
            record.genre,
        ));
    }
    Ok(movies)
}
