// ============================================
// Init System - Сборка состояния движка
// ============================================

use crate::engine::core::{EngineState, GameState};
use crate::engine::data::{ItemDb, ResourceBundle};
use crate::engine::profile::Profile;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Построить EngineState из загруженного bundle и профиля
    pub fn create_state(bundle: ResourceBundle, profile: Profile) -> EngineState {
        let items = ItemDb::from_bundle(&bundle);

        let mut levels: Vec<_> = bundle.levels().cloned().collect();
        levels.sort_by_key(|level| level.number);

        log::info!(
            "[INIT] Ресурсов: {}, предметов: {}, уровней: {}, игроков: {}",
            bundle.len(),
            items.count(),
            levels.len(),
            profile.accounts.len()
        );

        EngineState {
            bundle,
            items,
            levels,
            game: GameState::new(),
            profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::data::{LevelDefinition, ResourcePayload, ResourceRecord};

    #[test]
    fn test_levels_sorted_across_files() {
        let mut bundle = ResourceBundle::new();
        for (id, numbers) in [("late", vec![3, 2]), ("early", vec![1])] {
            bundle
                .insert(ResourceRecord {
                    id: id.to_string(),
                    version: "1.0".to_string(),
                    source: format!("{id}.json").into(),
                    payload: ResourcePayload::Levels {
                        levels: numbers.into_iter().map(|n| LevelDefinition::new(n, 5)).collect(),
                    },
                })
                .unwrap();
        }

        let state = InitSystem::create_state(bundle, Profile::new());
        let numbers: Vec<_> = state.levels.iter().map(|l| l.number).collect();
        assert_eq!(numbers, [1, 2, 3]);
        assert_eq!(state.current_level().unwrap().number, 1);
        assert_eq!(state.game, GameState::new());
    }

    #[test]
    fn test_empty_bundle() {
        let state = InitSystem::create_state(ResourceBundle::new(), Profile::new());
        assert!(state.is_empty());
        assert!(state.levels.is_empty());
        assert_eq!(state.items.count(), 0);
        assert!(state.current_level().is_none());
    }
}
