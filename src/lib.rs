pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use services::sessions::SessionStore;
use store::{
    BookingLedger, GeneratedSeatInventory, LocationDirectory, MemoryCatalog, MemoryLedger,
    MovieCatalog, SeatInventory, ShowtimeCatalog, UserStore,
};

// Shared state для всего приложения. Репозитории внедряются как трейт-объекты:
// мок-реализации можно заменить на настоящую БД, не трогая остальной код.
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieCatalog>,
    pub showtimes: Arc<dyn ShowtimeCatalog>,
    pub locations: Arc<dyn LocationDirectory>,
    pub seats: Arc<dyn SeatInventory>,
    pub ledger: Arc<dyn BookingLedger>,
    pub users: Arc<UserStore>,
    pub sessions: Arc<SessionStore>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let catalog = Arc::new(MemoryCatalog::with_seed(config.mock));
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(
            config.booking.session_ttl_minutes * 60,
        )));

        Arc::new(Self {
            movies: catalog.clone(),
            showtimes: catalog.clone(),
            locations: catalog,
            seats: Arc::new(GeneratedSeatInventory::new(config.mock)),
            ledger: Arc::new(MemoryLedger::new(config.mock)),
            users: Arc::new(UserStore::with_seed(config.mock)),
            sessions,
            config,
        })
    }
}
