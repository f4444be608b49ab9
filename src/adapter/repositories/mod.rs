//! # Adapter Repositories
//!
//! Реализации репозиториев

pub mod local_check_repository;
pub mod remote_check_repository;
