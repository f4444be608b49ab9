//! # Domain Services
//!
//! Доменные сервисы
//!
//! Чистая календарная логика без ввода-вывода.

pub mod batch_check;
pub mod leap_calendar;
pub mod pluralize;
pub mod superstition;
pub mod year_parse;
