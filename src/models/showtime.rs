use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    pub id: String,
    pub movie_id: String,
    pub location_id: String,
    pub date: NaiveDate,
    // "14:30" - время сеанса как на афише, без таймзоны
    pub time: String,
    pub auditorium: String,
}
