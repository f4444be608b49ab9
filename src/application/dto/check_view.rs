//! # Check View DTO
//!
//! Представление результата проверки одного года

use crate::application::dto::labels::status_label;
use crate::domain::entities::classification::Classification;

/// Результат проверки года
///
/// Готовые к показу строки для любого интерфейса
#[derive(Debug, Clone)]
pub struct CheckView {
    /// Проверенный год
    pub year: i64,
    /// Признак високосности
    pub is_leap: bool,
    /// Метка статуса
    pub status_label: &'static str,
    /// Итоговое сообщение
    pub message: String,
    /// Объяснение через ветвь правила
    pub explanation: String,
    /// Примета
    pub superstition: &'static str,
}

impl CheckView {
    /// Собирает представление из классификации.
    ///
    /// # Примеры
    ///
    /// Високосный год:
    ///
    /// ```
    /// use visokos::application::dto::check_view::CheckView;
    /// use visokos::domain::services::leap_calendar::LeapCalendarService;
    /// use visokos::domain::services::superstition::SUPERSTITIONS;
    ///
    /// let classification = LeapCalendarService::classify(2024);
    /// let view = CheckView::from_classification(&classification, SUPERSTITIONS[0]);
    ///
    /// assert!(view.is_leap);
    /// assert_eq!(view.status_label, "ВИСОКОСНЫЙ");
    /// assert_eq!(view.message, "2024: високосный год");
    /// ```
    ///
    /// Вековой невисокосный год:
    ///
    /// ```
    /// # use visokos::application::dto::check_view::CheckView;
    /// # use visokos::domain::services::leap_calendar::LeapCalendarService;
    /// # use visokos::domain::services::superstition::SUPERSTITIONS;
    /// let classification = LeapCalendarService::classify(1900);
    /// let view = CheckView::from_classification(&classification, SUPERSTITIONS[1]);
    ///
    /// assert!(!view.is_leap);
    /// assert_eq!(view.status_label, "НЕ ВИСОКОСНЫЙ");
    /// assert_eq!(view.explanation, "1900 ÷ 100 = 19, но не делится на 400");
    /// ```
    pub fn from_classification(
        classification: &Classification,
        superstition: &'static str,
    ) -> Self {
        let is_leap = classification.is_leap();
        Self {
            year: classification.year,
            is_leap,
            status_label: status_label(is_leap),
            message: classification.message(),
            explanation: classification.explanation(),
            superstition,
        }
    }
}
