//! # Year Parse Service
//!
//! Разбор пользовательского ввода в годы
//!
//! Единая точка превращения строк в числовые годы. Пробельные края
//! обрезаются до любой другой проверки, пустой ввод и нечисловой ввод
//! различаются разными ошибками.

use crate::domain::errors::YearError;

/// Сервис разбора годов из строк
pub struct YearParseService;

impl YearParseService {
    /// Разбирает одиночный параметр запроса
    ///
    /// Отсутствующее значение и пустая после обрезки строка
    /// равнозначны: год не указан.
    ///
    /// # Errors
    ///
    /// * `YearError::MissingYear` - параметр отсутствует или пуст
    /// * `YearError::NotANumber` - значение не разбирается как целое
    pub fn parse_param(raw: Option<&str>) -> Result<i64, YearError> {
        let trimmed = raw.unwrap_or("").trim();
        if trimmed.is_empty() {
            return Err(YearError::MissingYear);
        }
        trimmed.parse().map_err(|_| YearError::NotANumber)
    }

    /// Разбирает один элемент пакетного списка
    ///
    /// # Errors
    ///
    /// `YearError::InvalidToken` с исходным значением, если элемент
    /// не разбирается как целое
    pub fn parse_token(token: &str) -> Result<i64, YearError> {
        let trimmed = token.trim();
        trimmed
            .parse()
            .map_err(|_| YearError::InvalidToken(trimmed.to_string()))
    }

    /// Разбивает свободный ввод на элементы
    ///
    /// Разделители: запятая и любые пробельные символы. Пустые
    /// фрагменты между разделителями отбрасываются.
    pub fn tokenize(input: &str) -> Vec<String> {
        input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}
