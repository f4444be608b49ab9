//! # Check Year Use Case
//!
//! Проверка одного года

use std::sync::Arc;

use crate::application::dto::check_view::CheckView;
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::superstition::SuperstitionSource;

/// Проверка одного года
///
/// Классифицирует год через репозиторий и собирает представление
pub struct CheckYearUseCase<R: YearCheckRepository, S: SuperstitionSource> {
    repository: Arc<R>,
    superstitions: Arc<S>,
}

impl<R: YearCheckRepository, S: SuperstitionSource> CheckYearUseCase<R, S> {
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

    /// Проверяет год
    ///
    /// # Arguments
    ///
    /// * `token` - строковое значение года
    ///
    /// # Returns
    ///
    /// Представление результата проверки
    ///
    /// # Errors
    ///
    /// Ошибки разбора и ошибки удалённой проверки
    pub async fn execute(&self, token: &str) -> Result<CheckView, YearError> {
        let classification = self.repository.check_year(token).await?;
        Ok(CheckView::from_classification(
            &classification,
            self.superstitions.pick(),
        ))
    }
}
