// ============================================
// Core - Главный оркестратор движка
// ============================================
// Uninitialized -> Initialized -> Running -> Stopped
//                  ^                           |
//                  +------- initialize --------+
//
// Загрузчик ресурсов и шаг движка подставляются через
// DataLoader / RuntimeDriver, по умолчанию FsLoader / UpdateSystem.

use std::fmt;
use std::path::Path;

use crate::engine::data::{DataLoader, FsLoader};
use crate::engine::systems::{InitSystem, RuntimeDriver, SaveSystem, StepOutcome, UpdateSystem};

use super::config::{EngineConfig, CONFIG_FILE};
use super::error::CoreError;
use super::resources::EngineState;

/// Фаза жизненного цикла
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
    Stopped,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Initialized => "initialized",
            Phase::Running => "running",
            Phase::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Чем закончился вызов run()
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Драйвер сообщил Finished
    Completed,
    /// Исчерпан max_ticks; следующий run() продолжит
    TickLimit,
}

/// Итог run()
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    /// Шагов в этом вызове
    pub steps: u64,
    /// Тиков с начала прохождения
    pub ticks: u64,
    pub levels_cleared: u32,
    pub score: u64,
}

/// Оркестратор: владеет EngineState от initialize до shutdown
pub struct Core<L = FsLoader, D = UpdateSystem> {
    config: EngineConfig,
    loader: L,
    driver: D,
    phase: Phase,
    state: Option<EngineState>,
}

impl Core {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_parts(config, FsLoader::new(), UpdateSystem::new())
    }
}

impl<L: DataLoader, D: RuntimeDriver> Core<L, D> {
    /// Core с собственным загрузчиком и драйвером
    pub fn with_parts(config: EngineConfig, loader: L, driver: D) -> Self {
        Self {
            config,
            loader,
            driver,
            phase: Phase::Uninitialized,
            state: None,
        }
    }

    /// Загрузить ресурсы и профиль, построить EngineState.
    /// При ошибке состояние не создаётся и фаза не меняется
    pub fn initialize(&mut self, location: impl AsRef<Path>) -> Result<(), CoreError> {
        if matches!(self.phase, Phase::Initialized | Phase::Running) {
            return Err(CoreError::AlreadyInitialized);
        }

        let location = location.as_ref();
        log::info!("[CORE] Инициализация из {}", location.display());

        let bundle = self.loader.load(location).map_err(|e| {
            log::error!("[CORE] Не удалось загрузить ресурсы: {}", e);
            e
        })?;
        let profile = SaveSystem::load_or_create(self.config.save_file.as_deref())?;

        self.state = Some(InitSystem::create_state(bundle, profile));
        self.phase = Phase::Initialized;
        log::info!("[CORE] {}", self.phase);
        Ok(())
    }

    /// Крутить драйвер до Finished или max_ticks шагов
    pub fn run(&mut self) -> Result<RunReport, CoreError> {
        let Some(state) = self.state.as_mut() else {
            return Err(CoreError::NotInitialized);
        };

        if self.phase != Phase::Running {
            self.phase = Phase::Running;
            log::info!("[CORE] {}", self.phase);
        }

        let mut steps = 0;
        let outcome = loop {
            if steps >= self.config.max_ticks {
                log::warn!("[CORE] Достигнут лимит {} шагов", self.config.max_ticks);
                break RunOutcome::TickLimit;
            }
            match self.driver.step(state) {
                Ok(StepOutcome::Continue) => steps += 1,
                Ok(StepOutcome::Finished) => {
                    steps += 1;
                    break RunOutcome::Completed;
                }
                Err(e) => {
                    let tick = state.game.total_ticks;
                    return Err(self.abort(tick, e));
                }
            }
        };

        let game = &state.game;
        Ok(RunReport {
            outcome,
            steps,
            ticks: game.total_ticks,
            levels_cleared: game.levels_cleared,
            score: game.score,
        })
    }

    /// Сохранить профиль и освободить состояние.
    /// Без состояния (Uninitialized/Stopped) ничего не делает.
    /// Если сохранение не удалось, состояние и фаза остаются прежними
    pub fn shutdown(&mut self) -> Result<(), CoreError> {
        let Some(state) = self.state.as_ref() else {
            log::debug!("[CORE] shutdown: нечего освобождать ({})", self.phase);
            return Ok(());
        };

        if let Err(e) = SaveSystem::save_profile(self.config.save_file.as_deref(), &state.profile) {
            log::error!("[CORE] shutdown: профиль не сохранён: {}", e);
            return Err(e);
        }

        self.state = None;
        self.phase = Phase::Stopped;
        log::info!("[CORE] {}", self.phase);
        Ok(())
    }

    /// Ошибка драйвера: состояние считается испорченным и сбрасывается
    fn abort(&mut self, tick: u64, error: CoreError) -> CoreError {
        log::error!("[CORE] Ошибка на тике {}: {}", tick, error);
        self.state = None;
        self.phase = Phase::Stopped;
        match error {
            CoreError::Runtime { .. } => error,
            other => CoreError::Runtime { tick, reason: other.to_string() },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> Option<&EngineState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut EngineState> {
        self.state.as_mut()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

/// Логгер: RUST_LOG, иначе уровень из настроек
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Запуск движка: engine.toml -> initialize -> run -> shutdown
pub fn run() -> Result<RunReport, CoreError> {
    let config = EngineConfig::load(CONFIG_FILE)?;
    init_logging(&config.log_level);

    let data_dir = config.data_dir.clone();
    let mut core = Core::new(config);
    core.initialize(&data_dir)?;

    let result = core.run();
    core.shutdown()?;

    let report = result?;
    log::info!(
        "[CORE] {:?}: тиков {}, уровней пройдено {}, очки {}",
        report.outcome,
        report.ticks,
        report.levels_cleared,
        report.score
    );
    Ok(report)
}
