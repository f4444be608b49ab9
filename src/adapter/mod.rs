//! Adapter Layer
//!
//! Интеграция с внешним миром: HTTP, файлы конфигурации, часы

pub mod api;
pub mod config;
pub mod repositories;
pub mod superstition;
