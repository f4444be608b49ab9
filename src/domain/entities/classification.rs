//! # Classification Entity
//!
//! Результат классификации года по правилу високосности

/// Ветвь правила, определившая результат
///
/// Правило проверяется каскадом: 400 → 100 → 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeapReason {
    /// Год делится на 400
    DivisibleBy400,
    /// Год делится на 100, но не на 400
    CenturyNotDivisibleBy400,
    /// Год делится на 4 и не делится на 100
    DivisibleBy4NotBy100,
    /// Год не делится на 4
    NotDivisibleBy4,
}

/// Классификация года
///
/// Хранит год и ветвь правила; признак високосности и текстовые
/// представления выводятся из них
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub year: i64,
    pub reason: LeapReason,
}

impl Classification {
    /// Является ли год високосным
    pub fn is_leap(&self) -> bool {
        matches!(
            self.reason,
            LeapReason::DivisibleBy400 | LeapReason::DivisibleBy4NotBy100
        )
    }

    /// Обоснование результата
    ///
    /// # Returns
    ///
    /// Строка с арифметикой ветви правила, например
    /// «2024 ÷ 4 = 506 (делится на 4, не делится на 100)».
    /// Все показываемые деления точные, остатка нет.
    pub fn explanation(&self) -> String {
        match self.reason {
            LeapReason::DivisibleBy400 => {
                format!("{} ÷ 400 = {} (делится на 400)", self.year, self.year / 400)
            }
            LeapReason::CenturyNotDivisibleBy400 => {
                format!(
                    "{} ÷ 100 = {}, но не делится на 400",
                    self.year,
                    self.year / 100
                )
            }
            LeapReason::DivisibleBy4NotBy100 => {
                format!(
                    "{} ÷ 4 = {} (делится на 4, не делится на 100)",
                    self.year,
                    self.year / 4
                )
            }
            LeapReason::NotDivisibleBy4 => format!("{} не делится на 4", self.year),
        }
    }

    /// Однострочное сообщение о результате
    pub fn message(&self) -> String {
        let word = if self.is_leap() {
            "високосный"
        } else {
            "невисокосный"
        };
        format!("{}: {} год", self.year, word)
    }
}
