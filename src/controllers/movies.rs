use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::{Movie, Showtime};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/{id}", get(get_movie))
        .route("/movies/{id}/showtimes", get(get_movie_showtimes))
}

// GET /api/movies
async fn list_movies(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state
        .movies
        .list()
        .await
        .map_err(|e| AppError::FetchError(format!("movies: {}", e)))?;
    Ok(Json(movies))
}

// GET /api/movies/{id}
async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    state
        .movies
        .get_by_id(&id)
        .await
        .map_err(|e| AppError::FetchError(format!("movie: {}", e)))?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))
}

#[derive(Debug, Deserialize)]
struct ShowtimesQuery {
    #[serde(rename = "locationId")]
    location_id: String,
}

// GET /api/movies/{id}/showtimes?locationId=1
async fn get_movie_showtimes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ShowtimesQuery>,
) -> Result<Json<Vec<Showtime>>, AppError> {
    let showtimes = state
        .showtimes
        .get_by_movie_and_location(&id, &params.location_id)
        .await
        .map_err(|e| AppError::FetchError(format!("showtimes: {}", e)))?;
    Ok(Json(showtimes))
}
