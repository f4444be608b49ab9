//! # HTTP Server
//!
//! HTTP-сервер проверки високосных лет

mod handlers;
mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use log::info;

use crate::adapter::repositories::local_check_repository::LocalCheckRepository;

pub use routes::create_router;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<LocalCheckRepository>,
}

impl AppState {
    /// Создаёт состояние сервера
    pub fn new() -> Self {
        Self {
            repository: Arc::new(LocalCheckRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Запускает HTTP-сервер
///
/// # Arguments
///
/// * `host` - адрес для прослушивания
/// * `port` - порт для прослушивания
///
/// # Errors
///
/// Ошибки разбора адреса и привязки порта
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new();
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .context("Некорректный адрес сервера")?;
    info!("Сервер запускается на http://{}", addr);
    println!("✓ Сервер проверки високосных лет: http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Не удалось занять адрес")?;
    axum::serve(listener, app).await?;

    Ok(())
}
