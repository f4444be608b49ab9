//! # Domain Repositories
//!
//! Трейты репозиториев

pub mod year_check_repository;
