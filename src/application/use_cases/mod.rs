//! # Application Use Cases
//!
//! Сценарии приложения

pub mod check_multiple;
pub mod check_year;
pub mod find_adjacent;
