pub mod auth;
pub mod bookings;
pub mod locations;
pub mod movies;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(movies::routes())
        .merge(locations::routes())
        .merge(auth::routes())
        .merge(bookings::routes())
}
