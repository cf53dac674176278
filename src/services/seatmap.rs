use rand::Rng;

use crate::models::{Seat, SeatCategory};

pub const ROWS: [char; 8] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];
pub const SEATS_PER_ROW: u8 = 12;

// Вероятность того, что место свободно при генерации карты
const AVAILABILITY_RATE: f64 = 0.8;

/// Категория - чистая функция от координат места:
/// ряды D/E премиальные, углы A1/A2 и H11/H12 доступны для инвалидных колясок.
pub fn category_for(row: char, number: u8) -> SeatCategory {
    if row == 'D' || row == 'E' {
        SeatCategory::Premium
    } else if (row == 'A' && number <= 2) || (row == 'H' && number >= SEATS_PER_ROW - 1) {
        SeatCategory::Accessible
    } else {
        SeatCategory::Standard
    }
}

/// Полная карта зала: 8 рядов по 12 мест, форма детерминирована.
/// Доступность каждого места разыгрывается независимо на каждый вызов;
/// id сеанса не валидируется и попадает в id мест как есть.
pub fn generate(showtime_id: &str) -> Vec<Seat> {
    let mut rng = rand::thread_rng();
    let mut seats = Vec::with_capacity(ROWS.len() * SEATS_PER_ROW as usize);

    for row in ROWS {
        for number in 1..=SEATS_PER_ROW {
            seats.push(Seat {
                id: format!("{}-{}{}", showtime_id, row, number),
                row,
                number,
                category: category_for(row, number),
                is_available: rng.gen_bool(AVAILABILITY_RATE),
            });
        }
    }

    seats
}
