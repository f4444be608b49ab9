//! # Remote Check Repository
//!
//! Проверка годов через удалённый сервер
//!
//! Ответы сервера содержат готовые строки, но доменные сущности
//! восстанавливаются повторной классификацией по числу года.
//! Расхождение с ответом сервера логируется.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::adapter::api::client::YearApi;
use crate::adapter::api::models::CheckResponse;
use crate::domain::entities::adjacency::{Adjacency, LeapNeighbor};
use crate::domain::entities::batch_report::BatchReport;
use crate::domain::entities::classification::Classification;
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;
use crate::domain::services::leap_calendar::LeapCalendarService;

/// Репозиторий удалённой проверки
pub struct RemoteCheckRepository<A: YearApi> {
    api: Arc<A>,
}

impl<A: YearApi> RemoteCheckRepository<A> {
    /// Создаёт репозиторий поверх клиента
    ///
    /// # Arguments
    ///
    /// * `api` - клиент серверной проверки
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }
}

fn classification_from(response: &CheckResponse) -> Classification {
    let classification = LeapCalendarService::classify(response.year);
    if classification.is_leap() != response.is_leap {
        warn!(
            "Сервер вернул is_leap={} для года {}, локальная проверка не согласна",
            response.is_leap, response.year
        );
    }
    classification
}

#[async_trait]
impl<A: YearApi> YearCheckRepository for RemoteCheckRepository<A> {
    async fn check_year(&self, token: &str) -> Result<Classification, YearError> {
        let response = self.api.check(token).await?;
        Ok(classification_from(&response))
    }

    async fn check_batch(&self, tokens: &[String]) -> Result<BatchReport, YearError> {
        let response = self.api.check_multiple(tokens).await?;
        Ok(BatchReport {
            successes: response.results.iter().map(classification_from).collect(),
            errors: response.errors,
        })
    }

    async fn adjacent_leap_years(&self, token: &str) -> Result<Adjacency, YearError> {
        let response = self.api.adjacent(token).await?;

        let previous = match (
            response.previous_leap_year,
            response.previous_leap_years_away,
        ) {
            (Some(year), Some(years_away)) => Some(LeapNeighbor { year, years_away }),
            _ => None,
        };

        Ok(Adjacency {
            classification: LeapCalendarService::classify(response.year),
            next: LeapNeighbor {
                year: response.next_leap_year,
                years_away: response.next_leap_years_away,
            },
            previous,
        })
    }
}
