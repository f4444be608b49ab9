//! # Superstition
//!
//! Народные приметы о високосных годах
//!
//! Фиксированный набор примет и источник выбора одной из них.
//! Источник абстрагирован трейтом, чтобы представления не зависели
//! от способа выбора.

/// Приметы о високосных годах
pub const SUPERSTITIONS: [&str; 5] = [
    "Говорят, что високосный год приносит крупные перемены.",
    "Народная молва: свадьбы в високосный год рискованны.",
    "Кто родился в високосный год — часто к удаче.",
    "Некоторые считают: не начинать больших дел в високосный год.",
    "Говорят, что неожиданные встречи случаются чаще в високосный год.",
];

/// Примета по индексу с цикличным переходом
pub fn superstition_for_index(index: usize) -> &'static str {
    SUPERSTITIONS[index % SUPERSTITIONS.len()]
}

/// Источник примет
pub trait SuperstitionSource: Send + Sync {
    /// Выбирает примету
    fn pick(&self) -> &'static str;
}

/// Источник с фиксированным индексом
pub struct FixedSuperstition(pub usize);

impl SuperstitionSource for FixedSuperstition {
    fn pick(&self) -> &'static str {
        superstition_for_index(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_wraps_around() {
        assert_eq!(superstition_for_index(0), SUPERSTITIONS[0]);
        assert_eq!(superstition_for_index(4), SUPERSTITIONS[4]);
        assert_eq!(superstition_for_index(5), SUPERSTITIONS[0]);
        assert_eq!(superstition_for_index(12), SUPERSTITIONS[2]);
    }

    #[test]
    fn test_fixed_source() {
        let source = FixedSuperstition(1);
        assert_eq!(source.pick(), SUPERSTITIONS[1]);
        assert_eq!(source.pick(), SUPERSTITIONS[1]);
    }

    #[test]
    fn test_all_superstitions_distinct() {
        for (i, left) in SUPERSTITIONS.iter().enumerate() {
            for right in SUPERSTITIONS.iter().skip(i + 1) {
                assert_ne!(left, right);
            }
        }
    }
}
