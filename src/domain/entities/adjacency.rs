//! # Adjacency Entity
//!
//! Соседние високосные годы вокруг заданного года

use crate::domain::entities::classification::Classification;

/// Соседний високосный год и расстояние до него в годах
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeapNeighbor {
    pub year: i64,
    /// Расстояние до исходного года, всегда >= 1
    pub years_away: i64,
}

/// Соседние високосные годы
///
/// Следующий существует всегда; предыдущего может не быть для самых
/// ранних лет (нижняя граница поиска находится на годе 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub classification: Classification,
    pub next: LeapNeighbor,
    pub previous: Option<LeapNeighbor>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::classification::LeapReason;

    #[test]
    fn test_adjacency_without_previous() {
        let adjacency = Adjacency {
            classification: Classification {
                year: 3,
                reason: LeapReason::NotDivisibleBy4,
            },
            next: LeapNeighbor {
                year: 4,
                years_away: 1,
            },
            previous: None,
        };

        assert!(adjacency.previous.is_none());
        assert_eq!(adjacency.next.year, 4);
        assert_eq!(adjacency.next.years_away, 1);
    }

    #[test]
    fn test_adjacency_with_both_neighbors() {
        let adjacency = Adjacency {
            classification: Classification {
                year: 1900,
                reason: LeapReason::CenturyNotDivisibleBy400,
            },
            next: LeapNeighbor {
                year: 1904,
                years_away: 4,
            },
            previous: Some(LeapNeighbor {
                year: 1896,
                years_away: 4,
            }),
        };

        let previous = adjacency.previous.unwrap();
        assert_eq!(previous.year, 1896);
        assert_eq!(previous.years_away, 4);
        assert_eq!(adjacency.next.year, 1904);
    }
}
