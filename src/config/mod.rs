use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub mock: MockConfig,
    pub booking: BookingConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Искусственные задержки мок-сторов (миллисекунды).
// Значения по умолчанию повторяют тайминги реального каталога.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MockConfig {
    pub movie_delay_ms: u64,
    pub showtime_delay_ms: u64,
    pub seats_delay_ms: u64,
    pub booking_delay_ms: u64,
    pub auth_delay_ms: u64,
}

// Правила бронирования
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BookingConfig {
    pub max_seats_per_booking: usize,
    pub session_ttl_minutes: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cineseat=debug,tower_http=debug".to_string()),
            },
            mock: MockConfig {
                movie_delay_ms: env::var("MOCK_MOVIE_DELAY_MS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .expect("MOCK_MOVIE_DELAY_MS must be a valid number"),
                showtime_delay_ms: env::var("MOCK_SHOWTIME_DELAY_MS")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()
                    .expect("MOCK_SHOWTIME_DELAY_MS must be a valid number"),
                seats_delay_ms: env::var("MOCK_SEATS_DELAY_MS")
                    .unwrap_or_else(|_| "400".to_string())
                    .parse()
                    .expect("MOCK_SEATS_DELAY_MS must be a valid number"),
                booking_delay_ms: env::var("MOCK_BOOKING_DELAY_MS")
                    .unwrap_or_else(|_| "800".to_string())
                    .parse()
                    .expect("MOCK_BOOKING_DELAY_MS must be a valid number"),
                auth_delay_ms: env::var("MOCK_AUTH_DELAY_MS")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .expect("MOCK_AUTH_DELAY_MS must be a valid number"),
            },
            booking: BookingConfig {
                max_seats_per_booking: env::var("MAX_SEATS_PER_BOOKING")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .expect("MAX_SEATS_PER_BOOKING must be a valid number"),
                session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("SESSION_TTL_MINUTES must be a valid number"),
            },
        }
    }
}

impl MockConfig {
    /// Конфигурация без задержек (для тестов)
    pub fn instant() -> Self {
        Self {
            movie_delay_ms: 0,
            showtime_delay_ms: 0,
            seats_delay_ms: 0,
            booking_delay_ms: 0,
            auth_delay_ms: 0,
        }
    }
}
