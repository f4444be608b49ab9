//! # Visokos
//!
//! Проверка високосных лет: HTTP-сервер и командная строка
//!
//! Проект построен по клин-архитектуре и состоит из четырёх слоёв:
//!
//! - **Domain слой**: календарные правила и сущности (без внешних зависимостей)
//! - **Application слой**: сценарии приложения (use cases)
//! - **Adapter слой**: интеграция с внешним миром (HTTP-клиент, конфигурация)
//! - **Driver слой**: CLI, сервер, внедрение зависимостей

// coverage_attribute включается только при установленном cfg coverage_nightly
// Используется для исключения внешне-зависимого кода из замеров покрытия
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain слой (чистая календарная логика)
pub mod domain;

// Application слой (сценарии)
pub mod application;

// Adapter слой (Infrastructure)
pub mod adapter;

// Driver слой (Presentation)
pub mod driver;
