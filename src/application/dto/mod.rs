//! # Application DTOs
//!
//! Представления для показа пользователю

pub mod adjacent_view;
pub mod batch_view;
pub mod check_view;
pub mod labels;
