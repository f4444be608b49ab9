//! # Application Layer
//!
//! Сценарии приложения поверх доменного слоя
//!
//! ## Особенности
//!
//! - Комбинирует сущности и сервисы домена в сценарии
//! - Зависит от трейтов репозиториев, а не от реализаций
//! - Не знает деталей внешних систем
//!
//! ## Состав
//!
//! - **dto**: представления для показа пользователю
//! - **use_cases**: сценарии

pub mod dto;
pub mod use_cases;
