//! # API Wire Models
//!
//! Модели HTTP-контракта
//!
//! Общие модели для сервера и клиента. Порядок полей в ответах
//! фиксирован контрактом.

use serde::{Deserialize, Serialize};

use crate::domain::entities::adjacency::Adjacency;
use crate::domain::entities::batch_report::BatchReport;
use crate::domain::entities::classification::Classification;

/// Ответ проверки одного года
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResponse {
    pub year: i64,
    pub is_leap: bool,
    pub message: String,
}

/// Ответ пакетной проверки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<CheckResponse>,
    pub errors: Vec<String>,
    /// Обработано элементов, включая ошибочные
    pub total: usize,
    pub error_count: usize,
}

/// Ответ поиска соседних високосных лет
///
/// Поля предыдущего года равны null, когда его нет
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacentResponse {
    pub year: i64,
    pub is_leap: bool,
    pub next_leap_year: i64,
    pub next_leap_years_away: i64,
    pub previous_leap_year: Option<i64>,
    pub previous_leap_years_away: Option<i64>,
    pub message: String,
}

/// Тело POST-запроса проверки одного года
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub year: Option<String>,
}

/// Тело POST-запроса пакетной проверки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckMultipleRequest {
    #[serde(default)]
    pub years: Vec<String>,
}

/// Тело ответа с ошибкой
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&Classification> for CheckResponse {
    fn from(classification: &Classification) -> Self {
        Self {
            year: classification.year,
            is_leap: classification.is_leap(),
            message: classification.message(),
        }
    }
}

impl From<&BatchReport> for BatchResponse {
    fn from(report: &BatchReport) -> Self {
        Self {
            results: report.successes.iter().map(CheckResponse::from).collect(),
            errors: report.errors.clone(),
            total: report.total(),
            error_count: report.error_count(),
        }
    }
}

impl From<&Adjacency> for AdjacentResponse {
    fn from(adjacency: &Adjacency) -> Self {
        Self {
            year: adjacency.classification.year,
            is_leap: adjacency.classification.is_leap(),
            next_leap_year: adjacency.next.year,
            next_leap_years_away: adjacency.next.years_away,
            previous_leap_year: adjacency.previous.map(|n| n.year),
            previous_leap_years_away: adjacency.previous.map(|n| n.years_away),
            message: adjacency.classification.message(),
        }
    }
}
