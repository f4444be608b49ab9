//! # Local Check Repository
//!
//! Локальная проверка годов
//!
//! Вся работа выполняется доменными сервисами в памяти, без сети.

use async_trait::async_trait;

use crate::domain::entities::adjacency::Adjacency;
use crate::domain::entities::batch_report::BatchReport;
use crate::domain::entities::classification::Classification;
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::batch_check::BatchCheckService;
use crate::domain::services::leap_calendar::LeapCalendarService;
use crate::domain::services::year_parse::YearParseService;

/// Репозиторий локальной проверки
pub struct LocalCheckRepository;

impl LocalCheckRepository {
    /// Создаёт новый репозиторий
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalCheckRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl YearCheckRepository for LocalCheckRepository {
    async fn check_year(&self, token: &str) -> Result<Classification, YearError> {
        let year = YearParseService::parse_param(Some(token))?;
        Ok(LeapCalendarService::classify(year))
    }

    async fn check_batch(&self, tokens: &[String]) -> Result<BatchReport, YearError> {
        BatchCheckService::classify_batch(tokens)
    }

    async fn adjacent_leap_years(&self, token: &str) -> Result<Adjacency, YearError> {
        let year = YearParseService::parse_param(Some(token))?;
        LeapCalendarService::find_adjacent(year)
    }
}
