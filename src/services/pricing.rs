use rust_decimal::Decimal;

use crate::models::SeatCategory;

/// Прайс фиксированный; категория - enum, поэтому "неизвестных" категорий
/// на этом уровне не бывает.
pub fn price_of(category: SeatCategory) -> Decimal {
    match category {
        SeatCategory::Standard => Decimal::new(13_99, 2),
        SeatCategory::Premium => Decimal::new(16_99, 2),
        SeatCategory::Accessible => Decimal::new(12_99, 2),
    }
}
