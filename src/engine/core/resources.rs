// ============================================
// Resources - Состояние движка
// ============================================

use crate::engine::data::{ItemDb, LevelDefinition, ResourceBundle};
use crate::engine::profile::Profile;

/// Прогресс текущего прохождения
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Индекс текущего уровня в EngineState::levels
    pub level_index: usize,
    /// Тиков на текущем уровне
    pub level_tick: u64,
    /// Тиков всего
    pub total_ticks: u64,
    pub score: u64,
    pub levels_cleared: u32,
    /// Все уровни пройдены
    pub finished: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Всё состояние движка в одном месте. Владелец - Core
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    // Data
    pub bundle: ResourceBundle,
    pub items: ItemDb,
    /// Уровни, отсортированы по номеру
    pub levels: Vec<LevelDefinition>,

    // Progress
    pub game: GameState,

    // Persisted
    pub profile: Profile,
}

impl EngineState {
    /// Текущий уровень; None когда уровни кончились
    pub fn current_level(&self) -> Option<&LevelDefinition> {
        self.levels.get(self.game.level_index)
    }

    /// Bundle без единого ресурса
    pub fn is_empty(&self) -> bool {
        self.bundle.is_empty()
    }
}
