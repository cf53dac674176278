use async_trait::async_trait;

use crate::config::MockConfig;
use crate::models::Seat;
use crate::services::seatmap;
use crate::store::{simulate_latency, SeatInventory, StoreError};

/// Карта зала не хранится: каждый запрос отдает свежую генерацию.
/// Доступность мест при этом перебрасывается заново - это задокументированное
/// поведение демо-данных, а не персистентное состояние.
pub struct GeneratedSeatInventory {
    delays: MockConfig,
}

impl GeneratedSeatInventory {
    pub fn new(delays: MockConfig) -> Self {
        Self { delays }
    }
}

#[async_trait]
impl SeatInventory for GeneratedSeatInventory {
    async fn seats_for_showtime(&self, showtime_id: &str) -> Result<Vec<Seat>, StoreError> {
        simulate_latency(self.delays.seats_delay_ms).await;
        Ok(seatmap::generate(showtime_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_fetch_returns_a_full_map() {
        let inventory = GeneratedSeatInventory::new(MockConfig::instant());
        let seats = inventory.seats_for_showtime("42").await.unwrap();
        assert_eq!(seats.len(), 96);
        assert!(seats.iter().all(|s| s.id.starts_with("42-")));
    }
}
