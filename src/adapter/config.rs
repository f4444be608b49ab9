//! # Configuration
//!
//! Конфигурация приложения из JSON-файла
//!
//! Отсутствующий файл не ошибка: используются значения по умолчанию.
//! Частично заполненный файл дополняется по полям.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

/// Конфигурация приложения
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Адрес, на котором слушает сервер
    #[serde(default = "default_host")]
    pub host: String,
    /// Порт сервера
    #[serde(default = "default_port")]
    pub port: u16,
    /// Адрес сервера для удалённых проверок
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            backend_url: default_backend_url(),
        }
    }
}

impl Config {
    /// Загружает конфигурацию из файла
    ///
    /// # Arguments
    ///
    /// * `path` - путь к JSON-файлу, `~` разворачивается
    ///
    /// # Errors
    ///
    /// Ошибки чтения существующего файла и разбора JSON
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        let path = Path::new(&expanded);

        if !path.exists() {
            info!("Файл конфигурации не найден, используются значения по умолчанию");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Не удалось прочитать файл конфигурации")?;

        let config: Config =
            serde_json::from_str(&content).context("Не удалось разобрать JSON конфигурации")?;

        info!(
            "Конфигурация загружена: сервер {}:{}",
            config.host, config.port
        );

        Ok(config)
    }
}
