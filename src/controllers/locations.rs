use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::error::AppError;
use crate::models::Location;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/locations", get(list_locations))
}

// GET /api/locations - выбор кинотеатра хранится на клиенте
async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Location>>, AppError> {
    let locations = state
        .locations
        .list()
        .await
        .map_err(|e| AppError::FetchError(format!("locations: {}", e)))?;
    Ok(Json(locations))
}
