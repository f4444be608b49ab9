//! API Client Abstractions
//!
//! Клиент серверной проверки и его абстракция

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;

#[cfg(test)]
use mockall::automock;

use super::models::{
    AdjacentResponse, BatchResponse, CheckMultipleRequest, CheckResponse, ErrorResponse,
};
use crate::domain::errors::YearError;

/// Текст ошибки, когда сервер не объяснил отказ
const FALLBACK_ERROR: &str = "Ошибка при проверке";

/// Trait for server-side year checks
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait YearApi: Send + Sync {
    /// Проверяет один год на сервере
    async fn check(&self, token: &str) -> Result<CheckResponse, YearError>;

    /// Проверяет список годов на сервере
    async fn check_multiple(&self, tokens: &[String]) -> Result<BatchResponse, YearError>;

    /// Находит соседние високосные годы на сервере
    async fn adjacent(&self, token: &str) -> Result<AdjacentResponse, YearError>;
}

/// HTTP-клиент проверки годов
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Создаёт клиент для указанного адреса сервера
    ///
    /// # Arguments
    ///
    /// * `base_url` - адрес сервера, например `http://127.0.0.1:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn transport_error(err: reqwest::Error) -> YearError {
        warn!("Запрос к серверу не удался: {}", err);
        YearError::RequestFailed
    }

    /// Разбирает ответ сервера
    ///
    /// Ошибки контракта (статус 4xx с телом `{"error": ...}`)
    /// превращаются в `YearError::Backend` с текстом сервера.
    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, YearError> {
        if response.status().is_success() {
            response.json().await.map_err(Self::transport_error)
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| FALLBACK_ERROR.to_string());
            Err(YearError::Backend(message))
        }
    }
}

#[async_trait]
impl YearApi for ApiClient {
    async fn check(&self, token: &str) -> Result<CheckResponse, YearError> {
        let response = self
            .client
            .get(format!("{}/api/check", self.base_url))
            .query(&[("year", token)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }

    async fn check_multiple(&self, tokens: &[String]) -> Result<BatchResponse, YearError> {
        let request = CheckMultipleRequest {
            years: tokens.to_vec(),
        };
        let response = self
            .client
            .post(format!("{}/api/check-multiple", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }

    async fn adjacent(&self, token: &str) -> Result<AdjacentResponse, YearError> {
        let response = self
            .client
            .get(format!("{}/api/adjacent-leap-years", self.base_url))
            .query(&[("year", token)])
            .send()
            .await
            .map_err(Self::transport_error)?;

        Self::parse_response(response).await
    }
}
