//! # Adjacent View DTO
//!
//! Представление соседних високосных лет

use crate::application::dto::labels::status_label;
use crate::domain::entities::adjacency::{Adjacency, LeapNeighbor};
use crate::domain::services::pluralize::year_word;

/// Соседний високосный год
#[derive(Debug, Clone)]
pub struct NeighborView {
    /// Високосный год
    pub year: i64,
    /// Расстояние в годах, всегда >= 1
    pub years_away: i64,
    /// Метка направления
    pub label: &'static str,
    /// Подпись с расстоянием
    pub caption: String,
}

/// Соседние високосные годы вокруг проверенного
#[derive(Debug, Clone)]
pub struct AdjacentView {
    /// Проверенный год
    pub year: i64,
    /// Признак високосности
    pub is_leap: bool,
    /// Метка статуса
    pub status_label: &'static str,
    /// Итоговое сообщение
    pub message: String,
    /// Предыдущий високосный год, если он есть
    pub previous: Option<NeighborView>,
    /// Следующий високосный год
    pub next: NeighborView,
    /// Примета
    pub superstition: &'static str,
}

impl AdjacentView {
    /// Собирает представление из найденных соседей
    pub fn from_adjacency(adjacency: &Adjacency, superstition: &'static str) -> Self {
        let previous = adjacency.previous.map(|neighbor| NeighborView {
            year: neighbor.year,
            years_away: neighbor.years_away,
            label: "← Предыдущий",
            caption: past_caption(&neighbor),
        });

        let next = NeighborView {
            year: adjacency.next.year,
            years_away: adjacency.next.years_away,
            label: "Следующий →",
            caption: future_caption(&adjacency.next),
        };

        let is_leap = adjacency.classification.is_leap();
        Self {
            year: adjacency.classification.year,
            is_leap,
            status_label: status_label(is_leap),
            message: adjacency.classification.message(),
            previous,
            next,
            superstition,
        }
    }
}

fn past_caption(neighbor: &LeapNeighbor) -> String {
    format!(
        "Было {} {} назад",
        neighbor.years_away,
        year_word(neighbor.years_away)
    )
}

fn future_caption(neighbor: &LeapNeighbor) -> String {
    format!(
        "Будет через {} {}",
        neighbor.years_away,
        year_word(neighbor.years_away)
    )
}
