//! # Status Labels
//!
//! Метки статуса високосности

/// Метка статуса для карточки одного года
pub fn status_label(is_leap: bool) -> &'static str {
    if is_leap {
        "ВИСОКОСНЫЙ"
    } else {
        "НЕ ВИСОКОСНЫЙ"
    }
}

/// Метка статуса для строки пакетного отчёта
pub fn batch_status_label(is_leap: bool) -> &'static str {
    if is_leap {
        "✓ ВИСОКОСНЫЙ"
    } else {
        "✗ НЕ ВИСОКОСНЫЙ"
    }
}
