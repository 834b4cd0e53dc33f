// ============================================
// User Stats - Монеты и уровни прокачки
// ============================================

use serde::{Serialize, Deserialize};

/// Стартовый баланс нового игрока
pub const STARTING_COINS: u32 = 100;

/// Прокачиваемые характеристики
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Health,
    Mana,
    Speed,
    Damage,
    AttackSpeed,
    AttackRange,
    Critical,
    Defence,
}

impl StatKind {
    pub const COUNT: usize = 8;

    pub const ALL: [StatKind; Self::COUNT] = [
        StatKind::Health,
        StatKind::Mana,
        StatKind::Speed,
        StatKind::Damage,
        StatKind::AttackSpeed,
        StatKind::AttackRange,
        StatKind::Critical,
        StatKind::Defence,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Статистика одного игрока
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_id: String,
    coin: u32,
    /// Уровни характеристик, индекс = StatKind
    levels: [u32; StatKind::COUNT],
}

impl UserStats {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            coin: STARTING_COINS,
            levels: [0; StatKind::COUNT],
        }
    }

    pub fn coin(&self) -> u32 {
        self.coin
    }

    pub fn add_coin(&mut self, amount: u32) {
        self.coin = self.coin.saturating_add(amount);
    }

    /// Списать монеты. При нехватке баланс не меняется
    pub fn spend_coin(&mut self, amount: u32) -> bool {
        if self.coin >= amount {
            self.coin -= amount;
            true
        } else {
            false
        }
    }

    pub fn stat_level(&self, kind: StatKind) -> u32 {
        self.levels[kind.index()]
    }

    pub fn upgrade_stat(&mut self, kind: StatKind) -> u32 {
        let level = &mut self.levels[kind.index()];
        *level += 1;
        *level
    }
}
