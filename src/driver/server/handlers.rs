//! HTTP Handlers
//!
//! Обработчики HTTP-запросов
//!
//! GET-варианты читают год из параметров запроса, POST-варианты
//! из JSON-тела. Любая доменная ошибка превращается в ответ 400
//! с телом `{"error": ...}`.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use super::AppState;
use crate::adapter::api::models::{
    AdjacentResponse, BatchResponse, CheckMultipleRequest, CheckRequest, CheckResponse,
    ErrorResponse,
};
use crate::domain::errors::YearError;
use crate::domain::repositories::year_check_repository::YearCheckRepository;

/// Параметры запроса с годом
#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: Option<String>,
}

/// Health check for container orchestration
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

fn error_response(err: YearError) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

async fn check_token(
    state: &AppState,
    token: &str,
) -> Result<Json<CheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    let classification = state
        .repository
        .check_year(token)
        .await
        .map_err(error_response)?;

    Ok(Json(CheckResponse::from(&classification)))
}

async fn adjacent_token(
    state: &AppState,
    token: &str,
) -> Result<Json<AdjacentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let adjacency = state
        .repository
        .adjacent_leap_years(token)
        .await
        .map_err(error_response)?;

    Ok(Json(AdjacentResponse::from(&adjacency)))
}

/// GET /api/check
pub async fn check_get(
    State(state): State<AppState>,
    Query(params): Query<YearParams>,
) -> Result<Json<CheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    check_token(&state, params.year.as_deref().unwrap_or("")).await
}

/// POST /api/check
pub async fn check_post(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    check_token(&state, request.year.as_deref().unwrap_or("")).await
}

/// POST /api/check-multiple
pub async fn check_multiple(
    State(state): State<AppState>,
    Json(request): Json<CheckMultipleRequest>,
) -> Result<Json<BatchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let report = state
        .repository
        .check_batch(&request.years)
        .await
        .map_err(error_response)?;

    Ok(Json(BatchResponse::from(&report)))
}

/// GET /api/adjacent-leap-years
pub async fn adjacent_get(
    State(state): State<AppState>,
    Query(params): Query<YearParams>,
) -> Result<Json<AdjacentResponse>, (StatusCode, Json<ErrorResponse>)> {
    adjacent_token(&state, params.year.as_deref().unwrap_or("")).await
}

/// POST /api/adjacent-leap-years
pub async fn adjacent_post(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<AdjacentResponse>, (StatusCode, Json<ErrorResponse>)> {
    adjacent_token(&state, request.year.as_deref().unwrap_or("")).await
}
