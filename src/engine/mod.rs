// ============================================
// Engine Module - Data-driven игровое ядро
// ============================================
// Core загружает game_data/, строит EngineState и крутит
// систему обновления до завершения всех уровней

pub mod core;
pub mod data;
pub mod profile;
pub mod save;
pub mod systems;

pub use self::core::app::run;
