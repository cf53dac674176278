//! workflow.rs
//!
//! Оркестратор одной попытки бронирования.
//!
//! Ключевые компоненты:
//! 1.  **BookingFlow**: конечный автомат попытки. Загрузка (фильм + сеанс +
//!     карта зала параллельно) → выбор мест → отправка → подтверждение.
//!     Ошибки загрузки завершают попытку сразу; ошибка записи в журнал
//!     оставляет возможность повторной отправки.
//! 2.  **load_confirmation**: read-only просмотр готового бронирования.
//!     Проверка владельца выполняется до загрузки каких-либо деталей -
//!     чужое бронирование не отдается даже частично.
//!
//! Все зависимости приходят через репозиторные трейты, поэтому автомат
//! одинаково работает поверх мок-сторов и настоящего бэкенда.

use serde::Serialize;
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::{Booking, Movie, Seat, Showtime};
use crate::services::selection::{SeatSelection, ToggleOutcome};
use crate::store::{BookingLedger, MovieCatalog, SeatInventory, ShowtimeCatalog};

/// Состояния попытки. Фаза Loading - это время жизни `BookingFlow::load`;
/// сконструированный автомат всегда начинает в Selecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Selecting,
    Submitting,
    Confirmed { booking_id: String },
    /// Запись в журнал не удалась; выбор и повторная отправка разрешены
    Failed,
}

#[derive(Debug)]
pub struct BookingFlow {
    user_id: String,
    movie: Movie,
    showtime: Showtime,
    seats: Vec<Seat>,
    selection: SeatSelection,
    state: FlowState,
}

impl BookingFlow {
    /// Фаза Loading: три независимых чтения выполняются параллельно.
    /// Отсутствие фильма или сеанса - NotFound, сбой стора - FetchError.
    pub async fn load(
        movies: &dyn MovieCatalog,
        showtimes: &dyn ShowtimeCatalog,
        inventory: &dyn SeatInventory,
        movie_id: &str,
        showtime_id: &str,
        user_id: &str,
        max_seats: usize,
    ) -> Result<Self, AppError> {
        let (movie, showtime, seats) = tokio::join!(
            movies.get_by_id(movie_id),
            showtimes.get_by_id(showtime_id),
            inventory.seats_for_showtime(showtime_id),
        );

        let movie = movie
            .map_err(|e| AppError::FetchError(format!("movie: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("movie {}", movie_id)))?;
        let showtime = showtime
            .map_err(|e| AppError::FetchError(format!("showtime: {}", e)))?
            .ok_or_else(|| AppError::NotFound(format!("showtime {}", showtime_id)))?;
        let seats = seats.map_err(|e| AppError::FetchError(format!("seat map: {}", e)))?;

        let selection = SeatSelection::new(&seats, max_seats);

        Ok(Self {
            user_id: user_id.to_string(),
            movie,
            showtime,
            seats,
            selection,
            state: FlowState::Selecting,
        })
    }

    pub fn toggle_seat(&mut self, seat_id: &str) -> ToggleOutcome {
        match self.state {
            FlowState::Selecting => {}
            // После неудачной записи выбор снова можно менять
            FlowState::Failed => self.state = FlowState::Selecting,
            _ => return ToggleOutcome::Ignored,
        }
        self.selection.toggle(seat_id)
    }

    pub fn clear_selection(&mut self) {
        if matches!(self.state, FlowState::Selecting | FlowState::Failed) {
            self.state = FlowState::Selecting;
            self.selection.clear();
        }
    }

    /// Фаза Submitting: валидация → расчет суммы → запись в журнал.
    /// Пустой выбор отклоняется локально, состояние не меняется.
    /// Идемпотентности нет: повтор после частичного сбоя может создать
    /// второе бронирование.
    pub async fn submit(&mut self, ledger: &dyn BookingLedger) -> Result<Booking, AppError> {
        match self.state {
            FlowState::Selecting | FlowState::Failed => {}
            FlowState::Submitting => {
                return Err(AppError::ValidationError(
                    "Submission already in progress".to_string(),
                ))
            }
            FlowState::Confirmed { .. } => {
                return Err(AppError::ValidationError(
                    "Booking already confirmed".to_string(),
                ))
            }
        }

        if self.selection.is_empty() {
            return Err(AppError::ValidationError(
                "Please select at least one seat to continue".to_string(),
            ));
        }

        self.state = FlowState::Submitting;
        let total = self.selection.total();
        let booking = Booking::new(
            &self.user_id,
            &self.movie.id,
            &self.showtime.id,
            self.selection.snapshot(),
            total,
        );

        match ledger.append(booking.clone()).await {
            Ok(()) => {
                tracing::info!(
                    booking_id = %booking.id,
                    seats = booking.seats.len(),
                    total = %booking.total_amount,
                    "booking confirmed"
                );
                self.state = FlowState::Confirmed {
                    booking_id: booking.id.clone(),
                };
                Ok(booking)
            }
            Err(e) => {
                tracing::error!("booking append failed: {}", e);
                self.state = FlowState::Failed;
                Err(AppError::BookingError(e.to_string()))
            }
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn showtime(&self) -> &Showtime {
        &self.showtime
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn selected(&self) -> &[String] {
        self.selection.selected()
    }

    pub fn total(&self) -> Decimal {
        self.selection.total()
    }

    pub fn seat_limit(&self) -> usize {
        self.selection.limit()
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn state_name(&self) -> &'static str {
        match self.state {
            FlowState::Selecting => "selecting",
            FlowState::Submitting => "submitting",
            FlowState::Confirmed { .. } => "confirmed",
            FlowState::Failed => "failed",
        }
    }
}

/// Собранный вид подтверждения для владельца бронирования
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
    pub booking: Booking,
    pub movie: Movie,
    pub showtime: Showtime,
    /// Места бронирования, отсортированные по ряду, затем по номеру
    pub seats: Vec<Seat>,
}

pub async fn load_confirmation(
    ledger: &dyn BookingLedger,
    movies: &dyn MovieCatalog,
    showtimes: &dyn ShowtimeCatalog,
    inventory: &dyn SeatInventory,
    booking_id: &str,
    requester_id: &str,
) -> Result<ConfirmationView, AppError> {
    let booking = ledger
        .find_by_id(booking_id)
        .await
        .map_err(|e| AppError::FetchError(format!("booking: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("booking {}", booking_id)))?;

    // Проверка владельца до загрузки деталей
    if booking.user_id != requester_id {
        return Err(AppError::AccessDenied);
    }

    let (movie, showtime, seats) = tokio::join!(
        movies.get_by_id(&booking.movie_id),
        showtimes.get_by_id(&booking.showtime_id),
        inventory.seats_for_showtime(&booking.showtime_id),
    );

    let movie = movie
        .map_err(|e| AppError::FetchError(format!("movie: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", booking.movie_id)))?;
    let showtime = showtime
        .map_err(|e| AppError::FetchError(format!("showtime: {}", e)))?
        .ok_or_else(|| AppError::NotFound(format!("showtime {}", booking.showtime_id)))?;
    let seats = seats.map_err(|e| AppError::FetchError(format!("seat map: {}", e)))?;

    let mut seats: Vec<Seat> = seats
        .into_iter()
        .filter(|s| booking.seats.contains(&s.id))
        .collect();
    seats.sort_by(|a, b| a.row.cmp(&b.row).then(a.number.cmp(&b.number)));

    Ok(ConfirmationView {
        booking,
        movie,
        showtime,
        seats,
    })
}
