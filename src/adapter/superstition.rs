//! # Rotating Superstitions
//!
//! Источник примет с ротацией
//!
//! Каждый вызов выдаёт следующую примету по кругу. Начальная позиция
//! выбирается по системным часам, чтобы запуски не начинались
//! с одной и той же приметы.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::services::superstition::{
    superstition_for_index, SuperstitionSource, SUPERSTITIONS,
};

/// Ротация примет
pub struct RotatingSuperstitions {
    cursor: AtomicUsize,
}

impl RotatingSuperstitions {
    /// Создаёт источник со случайной начальной позицией
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() as usize)
            .unwrap_or(0);
        Self::with_offset(seed)
    }

    /// Создаёт источник с заданной начальной позицией
    pub fn with_offset(offset: usize) -> Self {
        Self {
            cursor: AtomicUsize::new(offset % SUPERSTITIONS.len()),
        }
    }
}

impl Default for RotatingSuperstitions {
    fn default() -> Self {
        Self::new()
    }
}

impl SuperstitionSource for RotatingSuperstitions {
    fn pick(&self) -> &'static str {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        superstition_for_index(index)
    }
}
