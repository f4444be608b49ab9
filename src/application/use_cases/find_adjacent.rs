//! # Find Adjacent Use Case
//!
//! Поиск соседних високосных лет

use std::sync::Arc;

use crate::application::dto::adjacent_view::AdjacentView;
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::superstition::SuperstitionSource;

/// Поиск соседних високосных лет
///
/// Находит соседей через репозиторий и собирает представление
pub struct FindAdjacentUseCase<R: YearCheckRepository, S: SuperstitionSource> {
    repository: Arc<R>,
    superstitions: Arc<S>,
}

impl<R: YearCheckRepository, S: SuperstitionSource> FindAdjacentUseCase<R, S> {
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

    /// Находит соседние високосные годы
    ///
    /// # Arguments
    ///
    /// * `token` - строковое значение года
    ///
    /// # Returns
    ///
    /// Представление с предыдущим и следующим високосными годами
    ///
    /// # Errors
    ///
    /// Ошибки разбора, выход за диапазон и ошибки удалённой проверки
    pub async fn execute(&self, token: &str) -> Result<AdjacentView, YearError> {
        let adjacency = self.repository.adjacent_leap_years(token).await?;
        Ok(AdjacentView::from_adjacency(
            &adjacency,
            self.superstitions.pick(),
        ))
    }
}
