//! # Year Check Repository Trait
//!
//! Абстракция проверки годов

use async_trait::async_trait;

use crate::domain::entities::adjacency::Adjacency;
use crate::domain::entities::batch_report::BatchReport;
use crate::domain::entities::classification::Classification;
use crate::domain::errors::YearError;

/// Репозиторий проверки годов
///
/// Скрывает, где выполняется проверка: локально или на удалённом
/// сервере. Все методы принимают сырые строки и сами отвечают
/// за их разбор.
#[async_trait]
pub trait YearCheckRepository: Send + Sync {
    /// Проверяет один год
    ///
    /// # Arguments
    ///
    /// * `token` - строковое значение года
    ///
    /// # Returns
    ///
    /// Классификация года
    async fn check_year(&self, token: &str) -> Result<Classification, YearError>;

    /// Проверяет список годов
    ///
    /// # Arguments
    ///
    /// * `tokens` - строковые значения годов
    ///
    /// # Returns
    ///
    /// Отчёт с успехами и ошибками по элементам
    async fn check_batch(&self, tokens: &[String]) -> Result<BatchReport, YearError>;

    /// Находит соседние високосные годы
    ///
    /// # Arguments
    ///
    /// * `token` - строковое значение года
    ///
    /// # Returns
    ///
    /// Классификация года и его високосные соседи
    async fn adjacent_leap_years(&self, token: &str) -> Result<Adjacency, YearError>;
}
