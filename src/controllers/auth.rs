use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[derive(Debug, Serialize)]
struct UserProfile {
    id: String,
    name: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

// POST /api/auth/register
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::ValidationError(
            "Name, email and password are required".to_string(),
        ));
    }

    let user = state
        .users
        .register(req.name.trim(), req.email.trim(), &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserProfile {
            id: user.id,
            name: user.name,
            email: user.email,
        }),
    ))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

// POST /api/auth/login - проверка учетных данных; дальше клиент ходит
// с Basic auth на каждом запросе
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let user = state
        .users
        .authenticate(&req.email, &req.password)
        .await
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    Ok(Json(UserProfile {
        id: user.id,
        name: user.name,
        email: user.email,
    }))
}

// POST /api/auth/logout - сессий на сервере нет, просто подтверждаем
async fn logout() -> impl IntoResponse {
    Json(json!({ "message": "You have been successfully logged out" }))
}

// GET /api/auth/me
async fn me(user: AuthUser) -> Json<AuthUser> {
    Json(user)
}
