// ============================================
// Update System - Шаг игровой логики
// ============================================
// Один шаг = один тик текущего уровня. Уровень пройден через
// duration_ticks тиков; движок останавливается после последнего уровня.

use crate::engine::core::{CoreError, EngineState};

/// Что делать после шага
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished,
}

/// Продвигает EngineState вперёд. Core вызывает step() до Finished
pub trait RuntimeDriver {
    fn step(&mut self, state: &mut EngineState) -> Result<StepOutcome, CoreError>;
}

impl<F> RuntimeDriver for F
where
    F: FnMut(&mut EngineState) -> Result<StepOutcome, CoreError>,
{
    fn step(&mut self, state: &mut EngineState) -> Result<StepOutcome, CoreError> {
        self(state)
    }
}

/// Система обновления: проходит уровни из bundle по порядку
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateSystem;

impl UpdateSystem {
    pub fn new() -> Self {
        Self
    }

    /// Основной шаг обновления
    pub fn update(state: &mut EngineState) -> Result<StepOutcome, CoreError> {
        if state.game.finished {
            return Ok(StepOutcome::Finished);
        }

        let (number, duration, bonus) = match state.current_level() {
            Some(level) => (level.number, level.duration_ticks, level.clear_bonus),
            None => {
                state.game.finished = true;
                return Ok(StepOutcome::Finished);
            }
        };

        let game = &mut state.game;
        game.total_ticks += 1;
        game.level_tick += 1;

        if game.level_tick < duration {
            return Ok(StepOutcome::Continue);
        }

        // Уровень пройден
        game.score = game.score.checked_add(bonus).ok_or_else(|| CoreError::Runtime {
            tick: game.total_ticks,
            reason: format!("score overflow on level {}", number),
        })?;
        game.levels_cleared += 1;
        game.level_index += 1;
        game.level_tick = 0;
        log::info!("[UPDATE] Уровень {} пройден (тик {}, очки {})", number, game.total_ticks, game.score);

        if game.level_index >= state.levels.len() {
            state.game.finished = true;
            return Ok(StepOutcome::Finished);
        }
        Ok(StepOutcome::Continue)
    }
}

impl RuntimeDriver for UpdateSystem {
    fn step(&mut self, state: &mut EngineState) -> Result<StepOutcome, CoreError> {
        Self::update(state)
    }
}
