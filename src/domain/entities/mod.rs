//! # Domain Entities
//!
//! Бизнес-сущности предметной области
//!
//! ## Сущности
//!
//! - **Classification**: классификация года по правилу високосности
//! - **Adjacency**: соседние високосные годы вокруг заданного
//! - **BatchReport**: итог пакетной проверки

pub mod adjacency;
pub mod batch_report;
pub mod classification;
