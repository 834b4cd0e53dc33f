// ============================================
// High Scores - Таблицы рекордов по режимам
// ============================================

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Deserialize};

/// Размер таблицы рекордов
pub const MAX_HIGH_SCORES: usize = 7;

/// Имя-заглушка для пустых строк таблицы
const PLACEHOLDER_NAME: &str = "ERR";

/// Режим игры
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    OnePlayer,
    TwoPlayer,
}

impl PlayMode {
    pub fn label(self) -> &'static str {
        match self {
            PlayMode::OnePlayer => "1P",
            PlayMode::TwoPlayer => "2P",
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Одна строка таблицы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    pub value: u64,
}

impl Score {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self { name: name.into(), value }
    }
}

/// Таблицы рекордов; отсортированы по убыванию очков
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    tables: BTreeMap<PlayMode, Vec<Score>>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Таблица режима; если рекордов ещё нет - таблица-заглушка
    pub fn table(&self, mode: PlayMode) -> Vec<Score> {
        self.tables
            .get(&mode)
            .cloned()
            .unwrap_or_else(default_table)
    }

    /// Добавить результат. Возвращает место в таблице (0 = первое)
    pub fn submit(&mut self, mode: PlayMode, name: &str, value: u64) -> Option<usize> {
        let table = self.tables.entry(mode).or_insert_with(default_table);

        // Равные очки: старый рекорд остаётся выше
        let rank = table
            .iter()
            .position(|s| s.value < value)
            .unwrap_or(table.len());
        if rank >= MAX_HIGH_SCORES {
            return None;
        }

        table.insert(rank, Score::new(name, value));
        table.truncate(MAX_HIGH_SCORES);
        log::info!("[PROFILE] {} рекорд #{}: {} ({})", mode, rank + 1, name, value);
        Some(rank)
    }

    /// Есть ли сохранённая таблица для режима
    pub fn has_table(&self, mode: PlayMode) -> bool {
        self.tables.contains_key(&mode)
    }
}

fn default_table() -> Vec<Score> {
    vec![Score::new(PLACEHOLDER_NAME, 0); MAX_HIGH_SCORES]
}
