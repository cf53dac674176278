use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::services::workflow::BookingFlow;

/// Одна живая попытка бронирования. Мьютекс сессии сериализует
/// toggle/submit - повторная отправка не может войти, пока первая в полете.
pub struct BookingSession {
    pub flow: BookingFlow,
    touched_at: Instant,
}

impl BookingSession {
    fn new(flow: BookingFlow) -> Self {
        Self {
            flow,
            touched_at: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.touched_at = Instant::now();
    }

    fn idle_for(&self) -> Duration {
        self.touched_at.elapsed()
    }
}

/// Реестр активных сессий бронирования
pub struct SessionStore {
    ttl: Duration,
    inner: RwLock<HashMap<Uuid, Arc<Mutex<BookingSession>>>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, flow: BookingFlow) -> Uuid {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(BookingSession::new(flow)));
        self.inner.write().await.insert(id, session);
        tracing::debug!(session_id = %id, "booking session opened");
        id
    }

    pub async fn get(&self, id: &Uuid) -> Option<Arc<Mutex<BookingSession>>> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn remove(&self, id: &Uuid) -> bool {
        self.inner.write().await.remove(id).is_some()
    }

    /// Убрать сессии, простоявшие дольше TTL. Сессии, занятые запросом
    /// прямо сейчас, не трогаем.
    pub async fn sweep_expired(&self) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.len();
        let ttl = self.ttl;
        inner.retain(|_, session| match session.try_lock() {
            Ok(session) => session.idle_for() < ttl,
            Err(_) => true,
        });
        before - inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::config::MockConfig;
    use crate::models::Seat;
    use crate::services::seatmap;
    use crate::store::{MemoryCatalog, SeatInventory, StoreError};

    struct OpenInventory;

    #[async_trait]
    impl SeatInventory for OpenInventory {
        async fn seats_for_showtime(&self, showtime_id: &str) -> Result<Vec<Seat>, StoreError> {
            Ok(seatmap::generate(showtime_id))
        }
    }

    async fn flow() -> BookingFlow {
        let catalog = MemoryCatalog::with_seed(MockConfig::instant());
        BookingFlow::load(&catalog, &catalog, &OpenInventory, "1", "1", "u1", 8)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn insert_get_remove() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.insert(flow().await).await;

        assert!(store.get(&id).await.is_some());
        assert!(store.remove(&id).await);
        assert!(store.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn sweep_removes_idle_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.insert(flow().await).await;

        assert_eq!(store.sweep_expired().await, 1);
        assert!(store.get(&id).await.is_none());
    }

    #[tokio::test]
    async fn sweep_keeps_fresh_sessions() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = store.insert(flow().await).await;

        assert_eq!(store.sweep_expired().await, 0);
        assert!(store.get(&id).await.is_some());
    }
}
