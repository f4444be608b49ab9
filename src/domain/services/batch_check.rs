//! # Batch Check Service
//!
//! Пакетная классификация списка годов
//!
//! Каждый элемент обрабатывается независимо: ошибочные элементы
//! не прерывают пакет, а накапливаются в отчёте. Элементы из одних
//! пробелов не считаются попыткой проверки и пропускаются.

use crate::domain::entities::batch_report::BatchReport;
use crate::domain::errors::YearError;
use crate::domain::services::leap_calendar::LeapCalendarService;
use crate::domain::services::year_parse::YearParseService;

/// Сервис пакетной проверки годов
pub struct BatchCheckService;

impl BatchCheckService {
    /// Классифицирует список элементов
    ///
    /// # Errors
    ///
    /// `YearError::EmptyInput`, если после отбрасывания пустых
    /// элементов проверять нечего
    pub fn classify_batch(tokens: &[String]) -> Result<BatchReport, YearError> {
        let attempted: Vec<&str> = tokens
            .iter()
            .map(|token| token.trim())
            .filter(|token| !token.is_empty())
            .collect();

        if attempted.is_empty() {
            return Err(YearError::EmptyInput);
        }

        let mut report = BatchReport::new();
        for token in attempted {
            match YearParseService::parse_token(token) {
                Ok(year) => report.successes.push(LeapCalendarService::classify(year)),
                Err(err) => report.errors.push(err.to_string()),
            }
        }

        Ok(report)
    }
}
