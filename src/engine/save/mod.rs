// ============================================
// Save - Файл профиля игроков
// ============================================
// Формат profile.dat: заголовок + bincode тело с ZSTD сжатием

mod header;
mod profile_file;

pub use header::{SaveHeader, MAGIC_NUMBER, SAVE_VERSION};
pub use profile_file::{ProfileFile, SaveError};
