use async_trait::async_trait;

use crate::config::MockConfig;
use crate::models::{Location, Movie, Showtime};
use crate::store::{
    simulate_latency, seed, LocationDirectory, MovieCatalog, ShowtimeCatalog, StoreError,
};

/// Каталог фильмов, сеансов и кинотеатров. Данные неизменяемые,
/// поэтому блокировки не нужны - только эмуляция задержки чтения.
pub struct MemoryCatalog {
    movies: Vec<Movie>,
    showtimes: Vec<Showtime>,
    locations: Vec<Location>,
    delays: MockConfig,
}

impl MemoryCatalog {
    pub fn with_seed(delays: MockConfig) -> Self {
        Self {
            movies: seed::movies(),
            showtimes: seed::showtimes(),
            locations: seed::locations(),
            delays,
        }
    }
}

#[async_trait]
impl MovieCatalog for MemoryCatalog {
    async fn list(&self) -> Result<Vec<Movie>, StoreError> {
        simulate_latency(self.delays.movie_delay_ms).await;
        Ok(self.movies.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Movie>, StoreError> {
        simulate_latency(self.delays.movie_delay_ms).await;
        Ok(self.movies.iter().find(|m| m.id == id).cloned())
    }
}

#[async_trait]
impl ShowtimeCatalog for MemoryCatalog {
    async fn get_by_id(&self, id: &str) -> Result<Option<Showtime>, StoreError> {
        simulate_latency(self.delays.showtime_delay_ms).await;
        Ok(self.showtimes.iter().find(|st| st.id == id).cloned())
    }

    async fn get_by_movie_and_location(
        &self,
        movie_id: &str,
        location_id: &str,
    ) -> Result<Vec<Showtime>, StoreError> {
        simulate_latency(self.delays.showtime_delay_ms).await;
        Ok(self
            .showtimes
            .iter()
            .filter(|st| st.movie_id == movie_id && st.location_id == location_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LocationDirectory for MemoryCatalog {
    async fn list(&self) -> Result<Vec<Location>, StoreError> {
        simulate_latency(self.delays.showtime_delay_ms).await;
        Ok(self.locations.clone())
    }
}
