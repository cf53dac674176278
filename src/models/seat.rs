use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    Standard,
    Premium,
    Accessible,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// "{showtimeId}-{row}{number}", уникален в пределах сеанса
    pub id: String,
    pub row: char,
    pub number: u8,
    #[serde(rename = "type")]
    pub category: SeatCategory,
    pub is_available: bool,
}

impl Seat {
    pub fn label(&self) -> String {
        format!("{}{}", self.row, self.number)
    }
}
