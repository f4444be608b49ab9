//! # BatchReport Entity
//!
//! Итог пакетной проверки списка годов

use crate::domain::entities::classification::Classification;

/// Итог пакетной проверки
///
/// Успехи и ошибки хранятся в порядке исходных токенов; ошибка по
/// одному токену не прерывает обработку остальных
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub successes: Vec<Classification>,
    pub errors: Vec<String>,
}

impl BatchReport {
    /// Создаёт пустой отчёт
    pub fn new() -> Self {
        Self {
            successes: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Сколько токенов было обработано
    ///
    /// Инвариант: `total = successes + errors`
    pub fn total(&self) -> usize {
        self.successes.len() + self.errors.len()
    }

    /// Сколько токенов не удалось разобрать
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}
