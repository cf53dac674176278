use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub poster_url: String,
    pub backdrop_url: String,
    pub release_date: NaiveDate,
    /// Длительность в минутах
    pub duration: u32,
    pub genres: Vec<String>,
    pub rating: f32,
    pub description: String,
}
