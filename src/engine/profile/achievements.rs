// ============================================
// Achievements - Достижения игроков по режимам
// ============================================
// Слот достижения только открывается: закрыть его обратно нельзя

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

use super::scores::PlayMode;

/// Число слотов у игрока без записей
pub const ACHIEVEMENT_SLOTS: usize = 5;

/// Таблицы достижений: режим -> игрок -> открытые слоты
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievements {
    tables: BTreeMap<PlayMode, BTreeMap<String, Vec<bool>>>,
}

impl Achievements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Слоты игрока; без записи - ACHIEVEMENT_SLOTS закрытых
    pub fn search(&self, mode: PlayMode, user: &str) -> Vec<bool> {
        self.tables
            .get(&mode)
            .and_then(|table| table.get(user.trim()))
            .cloned()
            .unwrap_or_else(|| vec![false; ACHIEVEMENT_SLOTS])
    }

    /// Открыть слоты, отмеченные true. Возвращает число впервые открытых
    pub fn unlock(&mut self, mode: PlayMode, user: &str, unlocked: &[bool]) -> usize {
        let user = user.trim();
        let slots = self
            .tables
            .entry(mode)
            .or_default()
            .entry(user.to_string())
            .or_insert_with(|| vec![false; ACHIEVEMENT_SLOTS]);

        if slots.len() < unlocked.len() {
            slots.resize(unlocked.len(), false);
        }

        let mut opened = 0;
        for (slot, &unlock) in slots.iter_mut().zip(unlocked) {
            if unlock && !*slot {
                *slot = true;
                opened += 1;
            }
        }
        if opened > 0 {
            log::info!("[PROFILE] {} {}: открыто достижений {}", mode, user, opened);
        }
        opened
    }

    /// Кто открыл слот: (режим, игрок) по порядку режима и имени
    pub fn completers(&self, slot: usize) -> Vec<(PlayMode, String)> {
        self.tables
            .iter()
            .flat_map(|(&mode, table)| {
                table
                    .iter()
                    .filter(move |(_, slots)| slots.get(slot).copied().unwrap_or(false))
                    .map(move |(user, _)| (mode, user.clone()))
            })
            .collect()
    }
}
