// ============================================
// Save Header - Заголовок файла профиля
// ============================================

use serde::{Serialize, Deserialize};

/// Магическое число "PROF" в ASCII
pub const MAGIC_NUMBER: [u8; 4] = [0x50, 0x52, 0x4F, 0x46];

/// Версия формата сохранения
pub const SAVE_VERSION: u32 = 1;

/// Заголовок файла сохранения (12 байт)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Магическое число для валидации
    pub magic: [u8; 4],
    /// Версия формата
    pub version: u32,
    /// Количество зарегистрированных игроков
    pub users: u32,
}

impl SaveHeader {
    pub fn new(users: u32) -> Self {
        Self {
            magic: MAGIC_NUMBER,
            version: SAVE_VERSION,
            users,
        }
    }
}

impl Default for SaveHeader {
    fn default() -> Self {
        Self::new(0)
    }
}
