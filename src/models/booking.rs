use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Длина кода подтверждения, который показываем клиенту
pub const CONFIRMATION_CODE_LEN: usize = 8;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub movie_id: String,
    pub showtime_id: String,
    /// Seat ids in selection order, never empty
    pub seats: Vec<String>,
    pub total_amount: Decimal,
    pub booking_date: DateTime<Utc>,
    pub confirmation_code: String,
}

impl Booking {
    pub fn new(
        user_id: &str,
        movie_id: &str,
        showtime_id: &str,
        seats: Vec<String>,
        total_amount: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            movie_id: movie_id.to_string(),
            showtime_id: showtime_id.to_string(),
            seats,
            total_amount,
            booking_date: Utc::now(),
            confirmation_code: generate_confirmation_code(),
        }
    }
}

// Коллизии кодов не проверяем: для мок-стора с низким объемом этого достаточно
pub fn generate_confirmation_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect()
}
