//! # Domain Errors
//!
//! Ошибки проверки годов

use thiserror::Error;

/// Ошибка проверки года
///
/// Текст каждого варианта совпадает с сообщением, которое видит
/// пользователь, и с полем `error` в ответах API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    /// Параметр `year` не передан или пуст
    #[error("Год не указан")]
    MissingYear,

    /// Одиночное значение года не парсится как целое
    #[error("Год должен быть числом")]
    NotANumber,

    /// Пакетная проверка без единого непустого токена
    #[error("Годы не указаны")]
    EmptyInput,

    /// Токен пакетной проверки не парсится как целое
    #[error("Некорректное значение года: {0}")]
    InvalidToken(String),

    /// Следующий високосный год не представим в i64
    #[error("Год слишком большой")]
    YearOutOfRange,

    /// Сообщение об ошибке, возвращённое бэкендом
    #[error("{0}")]
    Backend(String),

    /// Сетевая ошибка или нечитаемый ответ бэкенда
    #[error("Ошибка при отправке запроса")]
    RequestFailed,
}
