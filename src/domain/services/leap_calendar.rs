//! # Leap Calendar Service
//!
//! Правило високосности и поиск соседних високосных лет
//!
//! Правило пролептического григорианского календаря: год високосный,
//! если делится на 4 и не делится на 100, либо делится на 400.
//! Правило применяется единообразно к любым целым, включая
//! неположительные годы.

use crate::domain::entities::adjacency::{Adjacency, LeapNeighbor};
use crate::domain::entities::classification::{Classification, LeapReason};
use crate::domain::errors::YearError;

/// Наибольший год, для которого следующий високосный представим в i64.
/// Последний представимый високосный год равен i64::MAX - 3 (делится
/// на 4, не делится на 100), правее него високосных лет нет.
pub const MAX_SUPPORTED_YEAR: i64 = i64::MAX - 4;

/// Календарный сервис високосных лет
pub struct LeapCalendarService;

impl LeapCalendarService {
    /// Проверяет, является ли год високосным
    pub fn is_leap_year(year: i64) -> bool {
        (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
    }

    /// Классифицирует год
    ///
    /// # Arguments
    ///
    /// * `year` - год для проверки, принимается любое целое
    ///
    /// # Returns
    ///
    /// Классификация с ветвью правила, определившей результат
    pub fn classify(year: i64) -> Classification {
        let reason = if year % 400 == 0 {
            LeapReason::DivisibleBy400
        } else if year % 100 == 0 {
            LeapReason::CenturyNotDivisibleBy400
        } else if year % 4 == 0 {
            LeapReason::DivisibleBy4NotBy100
        } else {
            LeapReason::NotDivisibleBy4
        };

        Classification { year, reason }
    }

    /// Находит следующий високосный год строго после указанного
    ///
    /// Перебор ограничен: максимальный разрыв между соседними
    /// високосными годами равен 8 (например, 1896 → 1904).
    ///
    /// # Errors
    ///
    /// `YearError::YearOutOfRange`, если следующий високосный год
    /// не представим в i64
    pub fn next_leap_year(year: i64) -> Result<i64, YearError> {
        if year > MAX_SUPPORTED_YEAR {
            return Err(YearError::YearOutOfRange);
        }

        let mut candidate = year + 1;
        while !Self::is_leap_year(candidate) {
            candidate += 1;
        }
        Ok(candidate)
    }

    /// Находит предыдущий високосный год строго до указанного
    ///
    /// Нижняя граница поиска равна году 1: для годов <= 4 предыдущего
    /// високосного года нет, и это не ошибка
    pub fn previous_leap_year(year: i64) -> Option<i64> {
        let mut candidate = year;
        while candidate > 1 {
            candidate -= 1;
            if Self::is_leap_year(candidate) {
                return Some(candidate);
            }
        }
        None
    }

    /// Находит соседние високосные годы вокруг указанного
    ///
    /// # Errors
    ///
    /// `YearError::YearOutOfRange`, если следующий високосный год
    /// не представим в i64
    pub fn find_adjacent(year: i64) -> Result<Adjacency, YearError> {
        let classification = Self::classify(year);
        let next = Self::next_leap_year(year)?;
        let previous = Self::previous_leap_year(year).map(|prev| LeapNeighbor {
            year: prev,
            years_away: year - prev,
        });

        Ok(Adjacency {
            classification,
            next: LeapNeighbor {
                year: next,
                years_away: next - year,
            },
            previous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_years() {
        assert!(LeapCalendarService::is_leap_year(2000));
        assert!(!LeapCalendarService::is_leap_year(1900));
        assert!(LeapCalendarService::is_leap_year(2024));
        assert!(!LeapCalendarService::is_leap_year(2023));
    }

    #[test]
    fn test_negative_years() {
        // Пролептическое расширение: -4 делится на 4 и не на 100
        assert!(LeapCalendarService::is_leap_year(-4));
        assert!(!LeapCalendarService::is_leap_year(-100));
        assert!(LeapCalendarService::is_leap_year(-400));
        assert!(!LeapCalendarService::is_leap_year(-3));
        assert!(LeapCalendarService::is_leap_year(0));
    }

    #[test]
    fn test_400_year_periodicity() {
        for year in -1000..=3000 {
            assert_eq!(
                LeapCalendarService::is_leap_year(year),
                LeapCalendarService::is_leap_year(year + 400),
                "periodicity broken at year {}",
                year
            );
        }
    }

    #[test]
    fn test_classify_matches_is_leap_year() {
        for year in -500..=2500 {
            assert_eq!(
                LeapCalendarService::classify(year).is_leap(),
                LeapCalendarService::is_leap_year(year),
                "classify and is_leap_year disagree at year {}",
                year
            );
        }
    }

    #[test]
    fn test_classify_reasons() {
        assert_eq!(
            LeapCalendarService::classify(2000).reason,
            LeapReason::DivisibleBy400
        );
        assert_eq!(
            LeapCalendarService::classify(1900).reason,
            LeapReason::CenturyNotDivisibleBy400
        );
        assert_eq!(
            LeapCalendarService::classify(2024).reason,
            LeapReason::DivisibleBy4NotBy100
        );
        assert_eq!(
            LeapCalendarService::classify(2023).reason,
            LeapReason::NotDivisibleBy4
        );
    }

    #[test]
    fn test_classify_idempotent() {
        let first = LeapCalendarService::classify(1900);
        let second = LeapCalendarService::classify(1900);
        assert_eq!(first, second);
    }

    #[test]
    fn test_next_leap_year_simple() {
        assert_eq!(LeapCalendarService::next_leap_year(2023).unwrap(), 2024);
        assert_eq!(LeapCalendarService::next_leap_year(2024).unwrap(), 2028);
    }

    #[test]
    fn test_next_leap_year_century_skip() {
        // 1900 пропускается, разрыв 1896 → 1904
        assert_eq!(LeapCalendarService::next_leap_year(1896).unwrap(), 1904);
        assert_eq!(LeapCalendarService::next_leap_year(1897).unwrap(), 1904);
        assert_eq!(LeapCalendarService::next_leap_year(1900).unwrap(), 1904);
    }

    #[test]
    fn test_next_leap_year_bounded_gap() {
        for year in -1000..=3000i64 {
            let next = LeapCalendarService::next_leap_year(year).unwrap();
            assert!(next > year);
            assert!(next - year <= 8, "gap too large at year {}", year);
            assert!(LeapCalendarService::is_leap_year(next));
            // Между year и next нет високосных лет
            for between in (year + 1)..next {
                assert!(!LeapCalendarService::is_leap_year(between));
            }
        }
    }

    #[test]
    fn test_next_leap_year_out_of_range() {
        assert_eq!(
            LeapCalendarService::next_leap_year(i64::MAX),
            Err(YearError::YearOutOfRange)
        );
        assert_eq!(
            LeapCalendarService::next_leap_year(i64::MAX - 3),
            Err(YearError::YearOutOfRange)
        );
    }

    #[test]
    fn test_next_leap_year_at_upper_bound() {
        // Последний представимый високосный год равен i64::MAX - 3
        assert!(LeapCalendarService::is_leap_year(i64::MAX - 3));
        assert_eq!(
            LeapCalendarService::next_leap_year(MAX_SUPPORTED_YEAR).unwrap(),
            i64::MAX - 3
        );
    }

    #[test]
    fn test_next_leap_year_from_min() {
        assert_eq!(
            LeapCalendarService::next_leap_year(i64::MIN).unwrap(),
            i64::MIN + 4
        );
    }

    #[test]
    fn test_previous_leap_year_simple() {
        assert_eq!(LeapCalendarService::previous_leap_year(2023), Some(2020));
        assert_eq!(LeapCalendarService::previous_leap_year(2024), Some(2020));
        assert_eq!(LeapCalendarService::previous_leap_year(1904), Some(1896));
    }

    #[test]
    fn test_previous_leap_year_lower_sentinel() {
        // Годы 1..=4 не имеют предыдущего високосного года
        assert_eq!(LeapCalendarService::previous_leap_year(1), None);
        assert_eq!(LeapCalendarService::previous_leap_year(2), None);
        assert_eq!(LeapCalendarService::previous_leap_year(3), None);
        assert_eq!(LeapCalendarService::previous_leap_year(4), None);
        assert_eq!(LeapCalendarService::previous_leap_year(5), Some(4));
    }

    #[test]
    fn test_previous_leap_year_non_positive() {
        assert_eq!(LeapCalendarService::previous_leap_year(0), None);
        assert_eq!(LeapCalendarService::previous_leap_year(-100), None);
        assert_eq!(LeapCalendarService::previous_leap_year(i64::MIN), None);
    }

    #[test]
    fn test_previous_leap_year_bounded_gap() {
        for year in 10..=3000i64 {
            let prev = LeapCalendarService::previous_leap_year(year).unwrap();
            assert!(prev < year);
            assert!(year - prev <= 8, "gap too large at year {}", year);
            assert!(LeapCalendarService::is_leap_year(prev));
            // Между prev и year нет високосных лет
            for between in (prev + 1)..year {
                assert!(!LeapCalendarService::is_leap_year(between));
            }
        }
    }

    #[test]
    fn test_find_adjacent_around_century() {
        let adjacency = LeapCalendarService::find_adjacent(1900).unwrap();
        assert!(!adjacency.classification.is_leap());
        assert_eq!(adjacency.next.year, 1904);
        assert_eq!(adjacency.next.years_away, 4);

        let previous = adjacency.previous.unwrap();
        assert_eq!(previous.year, 1896);
        assert_eq!(previous.years_away, 4);
    }

    #[test]
    fn test_find_adjacent_distances_positive() {
        for year in [-401, -1, 1, 5, 100, 1897, 2000, 2024] {
            let adjacency = LeapCalendarService::find_adjacent(year).unwrap();
            assert!(adjacency.next.years_away >= 1);
            if let Some(previous) = adjacency.previous {
                assert!(previous.years_away >= 1);
            }
        }
    }

    #[test]
    fn test_find_adjacent_early_year_has_no_previous() {
        let adjacency = LeapCalendarService::find_adjacent(3).unwrap();
        assert!(adjacency.previous.is_none());
        assert_eq!(adjacency.next.year, 4);
    }

    #[test]
    fn test_find_adjacent_idempotent() {
        let first = LeapCalendarService::find_adjacent(1897).unwrap();
        let second = LeapCalendarService::find_adjacent(1897).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.next.years_away, 7);
    }

    #[test]
    fn test_find_adjacent_out_of_range() {
        assert_eq!(
            LeapCalendarService::find_adjacent(i64::MAX),
            Err(YearError::YearOutOfRange)
        );
    }
}
