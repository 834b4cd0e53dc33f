// ============================================
// Data-Driven Resource Definition
// ============================================
// Структуры для загрузки ресурсов из JSON (game_data/*.json)
//
// Один файл = один ресурс:
// { "id": "base_items", "kind": "items", "items": [ ... ] }
// { "id": "campaign",   "kind": "levels", "levels": [ ... ] }

use serde::{Deserialize, Serialize};

/// Описание предмета по умолчанию
pub const DEFAULT_DESCRIPTION: &str = "No description.";

// ============================================
// Items
// ============================================

/// Редкость выпадения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DropTier {
    #[default]
    Common,
    Uncommon,
    Rare,
}

/// Как активируется предмет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivationType {
    /// Срабатывает сразу при подборе (монета, лечение, очки)
    #[default]
    InstantOnPickup,
    /// Хранится и активируется клавишей
    ActiveOnKey,
    /// Действует, пока предмет у игрока
    Passive,
    /// Временный бафф с момента подбора
    TemporaryBuff,
}

/// Определение предмета из JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// Уникальный тип предмета ("COIN", "HEAL", ...)
    #[serde(rename = "type")]
    pub item_type: String,

    /// Спрайт
    #[serde(default)]
    pub sprite: String,

    #[serde(default)]
    pub drop_tier: DropTier,

    #[serde(default)]
    pub activation: ActivationType,

    /// Сила эффекта (лечение, очки, ...)
    #[serde(default)]
    pub effect_value: i32,

    /// Длительность эффекта
    #[serde(default)]
    pub effect_duration: u32,

    /// Цена в монетах (0 = бесплатно). Отрицательная обнуляется при загрузке
    #[serde(default)]
    pub cost: i32,

    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl ItemDefinition {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            sprite: String::new(),
            drop_tier: DropTier::default(),
            activation: ActivationType::default(),
            effect_value: 0,
            effect_duration: 0,
            cost: 0,
            id: None,
            display_name: None,
            description: None,
        }
    }

    /// ID предмета; если не задан - тип
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.item_type)
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.item_type)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    pub fn cost(&self) -> u32 {
        self.cost.max(0) as u32
    }
}

// ============================================
// Levels
// ============================================

/// Настройки уровня
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Номер уровня (с 1)
    pub number: u32,

    #[serde(default = "default_formation")]
    pub formation_width: u32,

    #[serde(default = "default_formation")]
    pub formation_height: u32,

    #[serde(default = "default_base_speed")]
    pub base_speed: u32,

    #[serde(default = "default_shooting_interval")]
    pub shooting_interval_ms: u32,

    /// Сколько тиков до прохождения уровня (> 0)
    pub duration_ticks: u64,

    /// Очки за прохождение
    #[serde(default)]
    pub clear_bonus: u64,
}

fn default_formation() -> u32 { 5 }
fn default_base_speed() -> u32 { 60 }
fn default_shooting_interval() -> u32 { 2000 }

impl LevelDefinition {
    pub fn new(number: u32, duration_ticks: u64) -> Self {
        Self {
            number,
            formation_width: default_formation(),
            formation_height: default_formation(),
            base_speed: default_base_speed(),
            shooting_interval_ms: default_shooting_interval(),
            duration_ticks,
            clear_bonus: 0,
        }
    }

    pub fn with_bonus(mut self, clear_bonus: u64) -> Self {
        self.clear_bonus = clear_bonus;
        self
    }
}

// ============================================
// Resource File
// ============================================

/// Содержимое ресурса, выбирается полем "kind"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourcePayload {
    Items { items: Vec<ItemDefinition> },
    Levels { levels: Vec<LevelDefinition> },
}

impl ResourcePayload {
    pub fn kind(&self) -> &'static str {
        match self {
            ResourcePayload::Items { .. } => "items",
            ResourcePayload::Levels { .. } => "levels",
        }
    }
}

/// Файл ресурса
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFile {
    /// Уникальный в пределах bundle идентификатор
    pub id: String,

    /// Версия формата
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(flatten)]
    pub payload: ResourcePayload,
}

fn default_version() -> String { "1.0".to_string() }

impl ResourceFile {
    /// Разобрать и проверить JSON ресурса
    pub fn from_json(json: &str) -> Result<Self, String> {
        Self::from_slice(json.as_bytes())
    }

    /// То же из сырых байт файла (невалидный UTF-8 - ошибка разбора)
    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let mut file: ResourceFile = serde_json::from_slice(bytes)
            .map_err(|e| format!("Failed to parse JSON: {}", e))?;
        file.normalize();
        file.validate()?;
        Ok(file)
    }

    /// Идентификаторы сравниваются без пробелов по краям
    fn normalize(&mut self) {
        self.id = self.id.trim().to_string();
        if let ResourcePayload::Items { items } = &mut self.payload {
            for item in items {
                item.item_type = item.item_type.trim().to_string();
                if let Some(id) = item.id.as_mut() {
                    *id = id.trim().to_string();
                }
            }
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("resource id is empty".to_string());
        }
        match &self.payload {
            ResourcePayload::Items { items } => {
                if let Some(item) = items.iter().find(|i| i.item_type.is_empty()) {
                    return Err(format!("item with empty type (sprite '{}')", item.sprite));
                }
                if let Some(item) = items.iter().find(|i| i.id.as_deref() == Some("")) {
                    return Err(format!("item {} has empty id", item.item_type));
                }
            }
            ResourcePayload::Levels { levels } => {
                if let Some(level) = levels.iter().find(|l| l.number == 0) {
                    return Err(format!("level number must start at 1 (got {})", level.number));
                }
                if let Some(level) = levels.iter().find(|l| l.duration_ticks == 0) {
                    return Err(format!("level {} has zero duration_ticks", level.number));
                }
            }
        }
        Ok(())
    }
}
