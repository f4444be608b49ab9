//! # Check Multiple Use Case
//!
//! Пакетная проверка списка годов

use std::sync::Arc;

use crate::application::dto::batch_view::BatchView;
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::superstition::SuperstitionSource;

/// Пакетная проверка годов
///
/// Классифицирует список через репозиторий и собирает сводный отчёт
pub struct CheckMultipleUseCase<R: YearCheckRepository, S: SuperstitionSource> {
    repository: Arc<R>,
    superstitions: Arc<S>,
}

impl<R: YearCheckRepository, S: SuperstitionSource> CheckMultipleUseCase<R, S> {
    /// Создаёт новый сценарий
    ///
    /// # Arguments
    ///
    /// * `repository` - репозиторий проверки годов
    /// * `superstitions` - источник примет
    pub fn new(repository: Arc<R>, superstitions: Arc<S>) -> Self {
        Self {
            repository,
            superstitions,
        }
    }

    /// Проверяет список годов
    ///
    /// # Arguments
    ///
    /// * `tokens` - строковые значения годов
    ///
    /// # Returns
    ///
    /// Пакетный отчёт со сводкой
    ///
    /// # Errors
    ///
    /// `YearError::EmptyInput`, если проверять нечего, а также
    /// ошибки удалённой проверки
    pub async fn execute(&self, tokens: &[String]) -> Result<BatchView, YearError> {
        let report = self.repository.check_batch(tokens).await?;
        Ok(BatchView::from_report(&report, self.superstitions.pick()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::domain::entities::adjacency::Adjacency;
    use crate::domain::entities::batch_report::BatchReport;
    use crate::domain::entities::classification::Classification;
    use crate::domain::services::batch_check::BatchCheckService;
    use crate::domain::services::leap_calendar::LeapCalendarService;
    use crate::domain::services::superstition::{FixedSuperstition, SUPERSTITIONS};

    struct MockYearRepository {
        response: Result<BatchReport, YearError>,
    }

    #[async_trait]
    impl YearCheckRepository for MockYearRepository {
        async fn check_year(&self, _token: &str) -> Result<Classification, YearError> {
            Ok(LeapCalendarService::classify(2024))
        }

        async fn check_batch(&self, _tokens: &[String]) -> Result<BatchReport, YearError> {
            self.response.clone()
        }

        async fn adjacent_leap_years(&self, _token: &str) -> Result<Adjacency, YearError> {
            LeapCalendarService::find_adjacent(2024)
        }
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_batch_with_mixed_results() {
        let report =
            BatchCheckService::classify_batch(&tokens(&["2000", "abc", "1900"])).unwrap();
        let repository = Arc::new(MockYearRepository {
            response: Ok(report),
        });
        let use_case = CheckMultipleUseCase::new(repository, Arc::new(FixedSuperstition(1)));

        let view = use_case.execute(&tokens(&["2000", "abc", "1900"])).await.unwrap();

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total, 3);
        assert_eq!(view.error_count, 1);
        assert_eq!(view.summary, "Проверено: 3 года, ошибок: 1");
        assert_eq!(view.superstition, SUPERSTITIONS[1]);
    }

    #[tokio::test]
    async fn test_batch_propagates_empty_input() {
        let repository = Arc::new(MockYearRepository {
            response: Err(YearError::EmptyInput),
        });
        let use_case = CheckMultipleUseCase::new(repository, Arc::new(FixedSuperstition(0)));

        let result = use_case.execute(&[]).await;

        assert_eq!(result.unwrap_err(), YearError::EmptyInput);
    }
}
