// ============================================
// Core Module - Оркестратор и состояние движка
// ============================================

pub mod app;
mod config;
mod error;
mod resources;

pub use app::{Core, Phase, RunOutcome, RunReport};
pub use config::{EngineConfig, CONFIG_FILE, DATA_DIR, DEFAULT_MAX_TICKS, SAVE_FILE};
pub use error::CoreError;
pub use resources::{EngineState, GameState};
