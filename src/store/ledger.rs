use async_trait::async_trait;
use std::collections::HashSet;
use tokio::sync::RwLock;

use crate::config::MockConfig;
use crate::models::Booking;
use crate::store::{simulate_latency, BookingLedger, StoreError};

/// Append-only журнал бронирований. Запись атомарна: проверка id и вставка
/// происходят под одной write-блокировкой, поэтому параллельные сессии не
/// требуют дополнительной координации.
pub struct MemoryLedger {
    delays: MockConfig,
    inner: RwLock<LedgerInner>,
}

#[derive(Default)]
struct LedgerInner {
    // Порядок вставки сохраняем: find_by_user должен быть воспроизводимым
    bookings: Vec<Booking>,
    ids: HashSet<String>,
}

impl MemoryLedger {
    pub fn new(delays: MockConfig) -> Self {
        Self {
            delays,
            inner: RwLock::new(LedgerInner::default()),
        }
    }
}

#[async_trait]
impl BookingLedger for MemoryLedger {
    async fn append(&self, booking: Booking) -> Result<(), StoreError> {
        simulate_latency(self.delays.booking_delay_ms).await;
        let mut inner = self.inner.write().await;
        if !inner.ids.insert(booking.id.clone()) {
            return Err(StoreError::DuplicateBookingId(booking.id));
        }
        tracing::info!(booking_id = %booking.id, user_id = %booking.user_id, "booking appended");
        inner.bookings.push(booking);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        simulate_latency(self.delays.booking_delay_ms).await;
        let inner = self.inner.read().await;
        Ok(inner.bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Booking>, StoreError> {
        simulate_latency(self.delays.booking_delay_ms).await;
        let inner = self.inner.read().await;
        Ok(inner
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
}
