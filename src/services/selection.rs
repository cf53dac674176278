use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::Seat;
use crate::services::pricing;

/// Результат клика по месту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Неизвестное или занятое место: выбор не меняется, уведомления нет
    Ignored,
    /// Достигнут лимит мест на бронирование: выбор не меняется, клиенту
    /// показывается уведомление о максимуме
    LimitReached,
}

/// Состояние выбора мест одной попытки бронирования.
/// Живет в рамках одной сессии, без блокировок.
#[derive(Debug)]
pub struct SeatSelection {
    inventory: HashMap<String, Seat>,
    // Порядок выбора сохраняем - он попадает в бронирование
    selected: Vec<String>,
    limit: usize,
}

impl SeatSelection {
    pub fn new(seats: &[Seat], limit: usize) -> Self {
        Self {
            inventory: seats.iter().map(|s| (s.id.clone(), s.clone())).collect(),
            selected: Vec::new(),
            limit,
        }
    }

    pub fn toggle(&mut self, seat_id: &str) -> ToggleOutcome {
        match self.inventory.get(seat_id) {
            Some(seat) if seat.is_available => {}
            // Занятые и несуществующие места молча игнорируем
            _ => return ToggleOutcome::Ignored,
        }

        if let Some(pos) = self.selected.iter().position(|id| id == seat_id) {
            self.selected.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.selected.len() >= self.limit {
            return ToggleOutcome::LimitReached;
        }

        self.selected.push(seat_id.to_string());
        ToggleOutcome::Added
    }

    /// Сумма по ценам категорий выбранных мест. Места, пропавшие из
    /// инвентаря, просто пропускаются - падать здесь нельзя.
    pub fn total(&self) -> Decimal {
        self.selected
            .iter()
            .filter_map(|id| self.inventory.get(id))
            .map(|seat| pricing::price_of(seat.category))
            .sum()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Снимок выбора для записи в бронирование
    pub fn snapshot(&self) -> Vec<String> {
        self.selected.clone()
    }
}
