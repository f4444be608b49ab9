//! # Driver Layer (Presentation)
//!
//! CLI, HTTP-сервер и оркестрация
//!
//! ## Особенности
//!
//! - Вызывает сценарии приложения
//! - Выполняет внедрение зависимостей и собирает всё вместе
//! - Интерфейс с пользователем
//!
//! ## Состав
//!
//! - **cli**: разбор аргументов командной строки
//! - **server**: HTTP-сервер с JSON API
//! - **workflow**: оркестрация сценариев

pub mod cli;
pub mod server;
pub mod workflow;

pub use cli::Args;
pub use workflow::YearCheckWorkflow;
