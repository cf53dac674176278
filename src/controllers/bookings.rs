use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use futures::future;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::models::{Booking, Seat};
use crate::services::selection::ToggleOutcome;
use crate::services::sessions::BookingSession;
use crate::services::workflow::{self, BookingFlow, ConfirmationView};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/showtimes/{id}/seats", get(get_seat_map))
        .route("/booking-sessions", post(open_session))
        .route("/booking-sessions/{id}/seats", patch(toggle_seat))
        .route("/booking-sessions/{id}/seats", delete(clear_selection))
        .route("/booking-sessions/{id}/confirm", post(confirm_session))
        .route("/booking-sessions/{id}", delete(abandon_session))
        .route("/bookings", get(get_user_bookings))
        .route("/bookings/{id}", get(get_confirmation))
}

/* ---------- helpers ---------- */

// Сессия существует и принадлежит пользователю? Иначе - не отдаем
async fn owned_session(
    state: &AppState,
    session_id: &Uuid,
    user: &AuthUser,
) -> Result<Arc<tokio::sync::Mutex<BookingSession>>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("booking session {}", session_id)))?;

    if session.lock().await.flow.user_id() != user.user_id {
        return Err(AppError::AccessDenied);
    }
    Ok(session)
}

/* ---------- SEAT MAP ---------- */

// GET /api/showtimes/{id}/seats
// Карта генерируется на каждый запрос; id сеанса не валидируется
async fn get_seat_map(
    State(state): State<Arc<AppState>>,
    Path(showtime_id): Path<String>,
) -> Result<Json<Vec<Seat>>, AppError> {
    let seats = state
        .seats
        .seats_for_showtime(&showtime_id)
        .await
        .map_err(|e| AppError::FetchError(format!("seat map: {}", e)))?;
    Ok(Json(seats))
}

/* ---------- BOOKING SESSIONS ---------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenSessionRequest {
    movie_id: String,
    showtime_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    session_id: Uuid,
    state: &'static str,
    movie: crate::models::Movie,
    showtime: crate::models::Showtime,
    seats: Vec<Seat>,
    selected: Vec<String>,
    total: Decimal,
    seat_limit: usize,
}

impl SessionView {
    fn assemble(session_id: Uuid, flow: &BookingFlow) -> Self {
        Self {
            session_id,
            state: flow.state_name(),
            movie: flow.movie().clone(),
            showtime: flow.showtime().clone(),
            seats: flow.seats().to_vec(),
            selected: flow.selected().to_vec(),
            total: flow.total(),
            seat_limit: flow.seat_limit(),
        }
    }
}

// POST /api/booking-sessions
async fn open_session(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<OpenSessionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let flow = BookingFlow::load(
        state.movies.as_ref(),
        state.showtimes.as_ref(),
        state.seats.as_ref(),
        &req.movie_id,
        &req.showtime_id,
        &user.user_id,
        state.config.booking.max_seats_per_booking,
    )
    .await?;

    let mut view = SessionView::assemble(Uuid::nil(), &flow);
    view.session_id = state.sessions.insert(flow).await;

    Ok((StatusCode::CREATED, Json(view)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ToggleSeatRequest {
    seat_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToggleResponse {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
    selected: Vec<String>,
    total: Decimal,
}

// PATCH /api/booking-sessions/{id}/seats
async fn toggle_seat(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    user: AuthUser,
    Json(req): Json<ToggleSeatRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let session = owned_session(&state, &session_id, &user).await?;
    let mut session = session.lock().await;
    session.touch();

    let outcome = session.flow.toggle_seat(&req.seat_id);
    let (outcome_name, notice) = match outcome {
        ToggleOutcome::Added => ("added", None),
        ToggleOutcome::Removed => ("removed", None),
        ToggleOutcome::Ignored => ("ignored", None),
        ToggleOutcome::LimitReached => (
            "limit-reached",
            Some(format!(
                "You can select up to {} seats per booking",
                session.flow.seat_limit()
            )),
        ),
    };

    Ok(Json(ToggleResponse {
        outcome: outcome_name,
        notice,
        selected: session.flow.selected().to_vec(),
        total: session.flow.total(),
    }))
}

// DELETE /api/booking-sessions/{id}/seats - начать выбор заново
async fn clear_selection(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    user: AuthUser,
) -> Result<Json<ToggleResponse>, AppError> {
    let session = owned_session(&state, &session_id, &user).await?;
    let mut session = session.lock().await;
    session.touch();
    session.flow.clear_selection();

    Ok(Json(ToggleResponse {
        outcome: "cleared",
        notice: None,
        selected: vec![],
        total: Decimal::ZERO,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmResponse {
    id: String,
    confirmation_code: String,
}

// POST /api/booking-sessions/{id}/confirm
async fn confirm_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let session = owned_session(&state, &session_id, &user).await?;
    let booking = {
        let mut session = session.lock().await;
        session.touch();
        session.flow.submit(state.ledger.as_ref()).await?
    };

    // Подтвержденная попытка завершена, сессия больше не нужна
    state.sessions.remove(&session_id).await;

    Ok((
        StatusCode::CREATED,
        Json(ConfirmResponse {
            id: booking.id,
            confirmation_code: booking.confirmation_code,
        }),
    ))
}

// DELETE /api/booking-sessions/{id}
async fn abandon_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    user: AuthUser,
) -> Result<StatusCode, AppError> {
    // Проверка владельца перед удалением
    owned_session(&state, &session_id, &user).await?;
    state.sessions.remove(&session_id).await;
    Ok(StatusCode::NO_CONTENT)
}

/* ---------- BOOKINGS ---------- */

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieSummary {
    id: String,
    title: String,
    poster_url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowtimeSummary {
    date: chrono::NaiveDate,
    time: String,
    auditorium: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingWithDetails {
    #[serde(flatten)]
    booking: Booking,
    movie: Option<MovieSummary>,
    showtime: Option<ShowtimeSummary>,
}

// GET /api/bookings - бронирования пользователя с деталями для профиля
async fn get_user_bookings(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<Vec<BookingWithDetails>>, AppError> {
    let bookings = state
        .ledger
        .find_by_user(&user.user_id)
        .await
        .map_err(|e| AppError::FetchError(format!("bookings: {}", e)))?;

    // Детали каждого бронирования подтягиваем параллельно
    let detailed = future::join_all(bookings.into_iter().map(|booking| {
        let state = state.clone();
        async move {
            let (movie, showtime) = tokio::join!(
                state.movies.get_by_id(&booking.movie_id),
                state.showtimes.get_by_id(&booking.showtime_id),
            );

            // Битые ссылки на каталог деградируют в null, список не падает
            let movie = movie.ok().flatten().map(|m| MovieSummary {
                id: m.id,
                title: m.title,
                poster_url: m.poster_url,
            });
            let showtime = showtime.ok().flatten().map(|st| ShowtimeSummary {
                date: st.date,
                time: st.time,
                auditorium: st.auditorium,
            });

            BookingWithDetails {
                booking,
                movie,
                showtime,
            }
        }
    }))
    .await;

    Ok(Json(detailed))
}

// GET /api/bookings/{id} - просмотр подтверждения, только для владельца
async fn get_confirmation(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
    user: AuthUser,
) -> Result<Json<ConfirmationView>, AppError> {
    let view = workflow::load_confirmation(
        state.ledger.as_ref(),
        state.movies.as_ref(),
        state.showtimes.as_ref(),
        state.seats.as_ref(),
        &booking_id,
        &user.user_id,
    )
    .await?;

    Ok(Json(view))
}
