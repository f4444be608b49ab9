//! # Batch View DTO
//!
//! Представление пакетного отчёта

use crate::application::dto::labels::batch_status_label;
use crate::domain::entities::batch_report::BatchReport;
use crate::domain::services::pluralize::year_word;

/// Строка пакетного отчёта
#[derive(Debug, Clone)]
pub struct BatchItemView {
    /// Проверенный год
    pub year: i64,
    /// Признак високосности
    pub is_leap: bool,
    /// Метка статуса со значком
    pub status_label: &'static str,
    /// Итоговое сообщение
    pub message: String,
}

/// Пакетный отчёт
///
/// Успешные строки, тексты ошибок и сводка по всему пакету
#[derive(Debug, Clone)]
pub struct BatchView {
    /// Успешно проверенные годы в порядке ввода
    pub items: Vec<BatchItemView>,
    /// Тексты ошибок в порядке ввода
    pub errors: Vec<String>,
    /// Обработано элементов, включая ошибочные
    pub total: usize,
    /// Количество ошибок
    pub error_count: usize,
    /// Сводная строка
    pub summary: String,
    /// Примета
    pub superstition: &'static str,
}

impl BatchView {
    /// Собирает представление из пакетного отчёта
    pub fn from_report(report: &BatchReport, superstition: &'static str) -> Self {
        let items = report
            .successes
            .iter()
            .map(|classification| BatchItemView {
                year: classification.year,
                is_leap: classification.is_leap(),
                status_label: batch_status_label(classification.is_leap()),
                message: classification.message(),
            })
            .collect();

        let total = report.total();
        let error_count = report.error_count();
        let mut summary = format!("Проверено: {} {}", total, year_word(total as i64));
        if error_count > 0 {
            summary.push_str(&format!(", ошибок: {}", error_count));
        }

        Self {
            items,
            errors: report.errors.clone(),
            total,
            error_count,
            summary,
            superstition,
        }
    }
}
