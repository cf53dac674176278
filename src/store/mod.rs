//! store
//!
//! Слой хранения. Все данные живут в памяти процесса и раздаются через
//! репозиторные трейты, которые внедряются в оркестратор как `Arc<dyn ...>` -
//! глобальных синглтонов нет, реализацию можно подменить на настоящую БД.
//!
//! Каждое чтение/запись эмулирует сетевую задержку (`MockConfig`), чтобы
//! потребители вели себя как с реальным бэкендом.

pub mod catalog;
pub mod ledger;
pub mod seats;
pub mod seed;
pub mod users;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Booking, Location, Movie, Seat, Showtime};

pub use catalog::MemoryCatalog;
pub use ledger::MemoryLedger;
pub use seats::GeneratedSeatInventory;
pub use users::UserStore;

#[derive(Debug, Error)]
pub enum StoreError {
    // Id бронирований генерируются, дубликат - фатальное нарушение целостности
    #[error("booking id {0} already exists")]
    DuplicateBookingId(String),

    #[error("email {0} already registered")]
    EmailTaken(String),
}

#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError>;
}

#[async_trait]
pub trait ShowtimeCatalog: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<Option<Showtime>, StoreError>;
    async fn get_by_movie_and_location(
        &self,
        movie_id: &str,
        location_id: &str,
    ) -> Result<Vec<Showtime>, StoreError>;
}

#[async_trait]
pub trait LocationDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Location>, StoreError>;
}

#[async_trait]
pub trait SeatInventory: Send + Sync {
    /// Полная карта зала для сеанса. Генерируется на каждый вызов заново.
    async fn seats_for_showtime(&self, showtime_id: &str) -> Result<Vec<Seat>, StoreError>;
}

#[async_trait]
pub trait BookingLedger: Send + Sync {
    /// Atomic insert-if-absent by id
    async fn append(&self, booking: Booking) -> Result<(), StoreError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError>;
    /// Все бронирования пользователя в порядке вставки
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError>;
}

// Эмуляция сетевой задержки мок-бэкенда
pub(crate) async fn simulate_latency(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
