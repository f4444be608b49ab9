//! # Domain Layer
//!
//! Этот модуль определяет календарные правила и сущности.
//!
//! ## Особенности
//!
//! - Не имеет внешних зависимостей (стандартная библиотека и минимум крейтов)
//! - Не зависит от фреймворков
//! - Ничего не знает про HTTP и файлы
//! - Чистая календарная логика
//!
//! ## Состав
//!
//! - **entities**: сущности (Classification, Adjacency, BatchReport)
//! - **errors**: доменные ошибки с текстами для пользователя
//! - **repositories**: трейты репозиториев (только интерфейсы)
//! - **services**: доменные сервисы (правило високосности, разбор ввода)

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
