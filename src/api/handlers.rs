use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dataset::Movie;
use crate::engine::RECOMMENDATION_COUNT;
use crate::error::{AppError, AppResult};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    pub movie_id: Option<usize>,
    pub title: Option<String>,
}

/// Display fields for one catalog movie
#[derive(Debug, Serialize)]
pub struct MovieSummary {
    pub id: usize,
    pub title: String,
    pub release_date: String,
    pub vote_count: i64,
    pub overview: String,
    pub genre: String,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            vote_count: movie.vote_count,
            overview: movie.overview.clone(),
            genre: movie.genre.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<MovieSummary>,
}

/// Successful `/recommend` payload: either the ranked titles, or the
/// candidate list when the given title matches more than one movie.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Recommendations { recommendations: Vec<String> },
    Disambiguation {
        message: String,
        results: Vec<MovieSummary>,
    },
}

// Handlers

/// Welcome payload for the root endpoint
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to the movie recommendation API" }))
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Search the catalog by title substring
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let matches = find_matches(&state, &params.title)?;

    Ok(Json(SearchResponse {
        results: matches.iter().map(|m| MovieSummary::from(*m)).collect(),
    }))
}

/// Recommend similar movies, by catalog id or by title
pub async fn recommend(
    State(state): State<AppState>,
    Query(params): Query<RecommendParams>,
) -> AppResult<Json<RecommendResponse>> {
    let movie_id = match params.movie_id {
        Some(id) => id,
        None => {
            let title = params.title.as_deref().ok_or_else(|| {
                AppError::InvalidRequest("Provide either 'movie_id' or 'title'".to_string())
            })?;
            let matches = find_matches(&state, title)?;

            if matches.len() > 1 {
                return Ok(Json(RecommendResponse::Disambiguation {
                    message: "Multiple matches found, select one".to_string(),
                    results: matches.iter().map(|m| MovieSummary::from(*m)).collect(),
                }));
            }
            matches[0].id
        }
    };

    let recommendations = state
        .engine
        .recommend(movie_id, RECOMMENDATION_COUNT)
        .ok_or_else(|| AppError::NotFound(format!("No movie with id {movie_id}")))?;

    Ok(Json(RecommendResponse::Recommendations {
        recommendations: recommendations.iter().map(|m| m.title.clone()).collect(),
    }))
}

/// Resolves a title query to its catalog matches
///
/// Blank queries are rejected: a substring match against "" would return
/// the whole catalog.
fn find_matches<'a>(state: &'a AppState, title: &str) -> Result<Vec<&'a Movie>, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "The 'title' parameter must not be empty".to_string(),
        ));
    }

    let matches = state.engine.find_by_title(title);
    if matches.is_empty() {
        return Err(AppError::NotFound(format!(
            "No movie found matching '{title}'"
        )));
    }
    Ok(matches)
}
