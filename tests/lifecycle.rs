use std::path::{Path, PathBuf};

use core_engine::engine::core::{Core, CoreError, EngineConfig, Phase, RunOutcome};
use core_engine::engine::data::{DataLoader, DropTier, FsLoader, ResourceBundle};
use core_engine::engine::profile::{LoginResult, PlayMode, StatKind};
use core_engine::engine::systems::{StepOutcome, UpdateSystem};

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("game_data")
}

#[test]
fn shipped_game_data_runs_to_completion() {
    let tmp = tempfile::TempDir::new().unwrap();
    let config = EngineConfig::default().with_save_file(tmp.path().join("profile.dat"));

    let mut core = Core::new(config);
    core.initialize(shipped_data()).expect("initialize");

    let state = core.state().unwrap();
    assert_eq!(state.bundle.len(), 2);
    assert_eq!(state.levels.len(), 7);
    assert_eq!(state.items.get("HEAL").unwrap().display_name(), "Repair Kit");
    assert_eq!(state.items.get("SCORE").unwrap().description(), "No description.");
    assert_eq!(state.items.items_by_tier(DropTier::Rare).len(), 2);

    let report = core.run().expect("run");
    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(report.steps, 6900);
    assert_eq!(report.ticks, 6900);
    assert_eq!(report.levels_cleared, 7);
    assert_eq!(report.score, 2650);

    core.shutdown().expect("shutdown");
    assert_eq!(core.phase(), Phase::Stopped);
}

#[test]
fn shipped_game_data_loads_idempotently() {
    let first = FsLoader::new().load(&shipped_data()).unwrap();
    let second = FsLoader::new().load(&shipped_data()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn player_session_is_persisted() {
    let tmp = tempfile::TempDir::new().unwrap();
    let save = tmp.path().join("saves").join("profile.dat");
    let config = EngineConfig::default().with_save_file(&save);

    let mut core = Core::new(config.clone());
    core.initialize(shipped_data()).unwrap();
    let report = core.run().unwrap();
    {
        let profile = &mut core.state_mut().unwrap().profile;
        assert!(profile.register("pilot", "pass123"));
        assert!(!profile.register("pilot", "other"));

        let stats = profile.stats_mut("pilot");
        assert!(stats.spend_coin(30));
        stats.upgrade_stat(StatKind::AttackSpeed);

        assert_eq!(profile.submit_score(PlayMode::OnePlayer, "pilot", report.score), Some(0));
        assert_eq!(profile.unlock_achievements(PlayMode::OnePlayer, "pilot", &[true, false, true]), 2);
    }
    core.shutdown().unwrap();
    assert!(save.is_file());

    let mut core = Core::new(config);
    core.initialize(shipped_data()).unwrap();
    let profile = &core.state().unwrap().profile;

    assert_eq!(profile.login("pilot", "pass123"), LoginResult::Success);
    assert_eq!(profile.login("pilot", "nope"), LoginResult::PasswordMismatch);
    assert_eq!(profile.login("ghost", "pass123"), LoginResult::IdNotFound);

    let stats = profile.stats("pilot").unwrap();
    assert_eq!(stats.coin(), 70);
    assert_eq!(stats.stat_level(StatKind::AttackSpeed), 1);

    let table = profile.high_scores(PlayMode::OnePlayer);
    assert_eq!(table[0].name, "pilot");
    assert_eq!(table[0].value, 2650);
    assert_eq!(table[1].name, "ERR");
    assert_eq!(profile.high_scores(PlayMode::TwoPlayer)[0].value, 0);

    assert_eq!(profile.achievements(PlayMode::OnePlayer, "pilot"), [true, false, true, false, false]);
    assert_eq!(profile.achievement_completers(2), [(PlayMode::OnePlayer, "pilot".to_string())]);
    assert!(profile.achievement_completers(1).is_empty());
}

#[test]
fn corrupt_profile_blocks_initialize() {
    let tmp = tempfile::TempDir::new().unwrap();
    let save = tmp.path().join("profile.dat");
    std::fs::write(&save, b"not a profile at all").unwrap();

    let mut core = Core::new(EngineConfig::default().with_save_file(&save));
    let err = core.initialize(shipped_data()).unwrap_err();

    assert!(matches!(err, CoreError::Save(_)));
    assert_eq!(core.phase(), Phase::Uninitialized);
    assert!(core.state().is_none());
}

#[test]
fn doubles_replace_loader_and_driver() {
    let loader = |_: &Path| -> Result<ResourceBundle, CoreError> { Ok(ResourceBundle::new()) };
    let driver = |state: &mut core_engine::engine::core::EngineState| -> Result<StepOutcome, CoreError> {
        state.game.score += 42;
        state.game.total_ticks += 1;
        Ok(StepOutcome::Finished)
    };

    let mut core = Core::with_parts(EngineConfig::default().without_save(), loader, driver);
    core.initialize("/definitely/not/here").unwrap();
    let report = core.run().unwrap();

    assert_eq!(report.score, 42);
    assert_eq!(report.ticks, 1);
    assert_eq!(report.steps, 1);
}

#[test]
fn default_driver_with_double_loader() {
    let loader = |_: &Path| -> Result<ResourceBundle, CoreError> {
        FsLoader::new().load(&shipped_data())
    };
    let config = EngineConfig::default().without_save().with_max_ticks(600);
    let mut core = Core::with_parts(config, loader, UpdateSystem::new());
    core.initialize("ignored").unwrap();

    let report = core.run().unwrap();
    assert_eq!(report.outcome, RunOutcome::TickLimit);
    assert_eq!(report.levels_cleared, 1);
    assert_eq!(report.score, 100);
}
