// ============================================
// Profile - Данные игроков между сессиями
// ============================================
// Аккаунты, монеты/прокачка, таблицы рекордов, достижения.
// На диск пишется через save::ProfileFile

mod accounts;
mod achievements;
mod scores;
mod stats;

pub use accounts::{Accounts, LoginResult, hash_password};
pub use achievements::{Achievements, ACHIEVEMENT_SLOTS};
pub use scores::{HighScores, PlayMode, Score, MAX_HIGH_SCORES};
pub use stats::{StatKind, UserStats, STARTING_COINS};

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

/// Всё, что переживает перезапуск движка
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub accounts: Accounts,
    pub stats: BTreeMap<String, UserStats>,
    pub scores: HighScores,
    pub achievements: Achievements,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, password: &str) -> bool {
        self.accounts.register(id, password)
    }

    pub fn login(&self, id: &str, password: &str) -> LoginResult {
        self.accounts.validate(id, password)
    }

    pub fn stats(&self, user_id: &str) -> Option<&UserStats> {
        self.stats.get(user_id)
    }

    /// Статистика игрока; создаётся со стартовыми значениями при первом обращении
    pub fn stats_mut(&mut self, user_id: &str) -> &mut UserStats {
        self.stats
            .entry(user_id.to_string())
            .or_insert_with(|| UserStats::new(user_id))
    }

    pub fn high_scores(&self, mode: PlayMode) -> Vec<Score> {
        self.scores.table(mode)
    }

    pub fn submit_score(&mut self, mode: PlayMode, name: &str, value: u64) -> Option<usize> {
        self.scores.submit(mode, name, value)
    }

    pub fn achievements(&self, mode: PlayMode, user_id: &str) -> Vec<bool> {
        self.achievements.search(mode, user_id)
    }

    pub fn unlock_achievements(&mut self, mode: PlayMode, user_id: &str, unlocked: &[bool]) -> usize {
        self.achievements.unlock(mode, user_id, unlocked)
    }

    /// Игроки, открывшие слот достижения
    pub fn achievement_completers(&self, slot: usize) -> Vec<(PlayMode, String)> {
        self.achievements.completers(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_created_on_first_access() {
        let mut profile = Profile::new();
        assert!(profile.stats("alice").is_none());

        profile.stats_mut("alice").upgrade_stat(StatKind::Speed);
        assert!(profile.stats_mut("alice").spend_coin(40));

        let stats = profile.stats("alice").unwrap();
        assert_eq!(stats.user_id, "alice");
        assert_eq!(stats.coin(), STARTING_COINS - 40);
        assert_eq!(stats.stat_level(StatKind::Speed), 1);
    }
}
