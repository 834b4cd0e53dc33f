// ============================================
// Resource Bundle - Набор загруженных ресурсов
// ============================================
// Единый источник правды для данных из game_data/

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::engine::core::CoreError;

use super::definition::{ItemDefinition, LevelDefinition, ResourceFile, ResourcePayload};

/// Один разобранный файл ресурса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub id: String,
    pub version: String,
    /// Откуда загружен (для сообщений об ошибках)
    pub source: PathBuf,
    pub payload: ResourcePayload,
}

impl ResourceRecord {
    pub fn from_file(file: ResourceFile, source: impl Into<PathBuf>) -> Self {
        Self {
            id: file.id,
            version: file.version,
            source: source.into(),
            payload: file.payload,
        }
    }
}

/// Набор ресурсов. Порядок записей = порядок загрузки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    records: Vec<ResourceRecord>,
    /// id ресурса -> индекс в records
    by_id: BTreeMap<String, usize>,
    /// Тип предмета -> файл, где он объявлен
    item_sources: BTreeMap<String, PathBuf>,
    /// ID предмета -> файл, где он объявлен
    item_id_sources: BTreeMap<String, PathBuf>,
    /// Номер уровня -> файл, где он объявлен
    level_sources: BTreeMap<u32, PathBuf>,
}

impl ResourceBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить ресурс. Идентификаторы (ресурса, предметов, уровней) уникальны
    pub fn insert(&mut self, record: ResourceRecord) -> Result<(), CoreError> {
        if let Some(&idx) = self.by_id.get(&record.id) {
            return Err(duplicate(&record.id, &self.records[idx].source, &record.source));
        }

        // Сначала проверяем всё, потом регистрируем: bundle не меняется при ошибке
        let mut new_items: BTreeSet<&str> = BTreeSet::new();
        let mut new_item_ids: BTreeSet<&str> = BTreeSet::new();
        let mut new_levels: BTreeSet<u32> = BTreeSet::new();
        match &record.payload {
            ResourcePayload::Items { items } => {
                for item in items {
                    if let Some(first) = self.item_sources.get(&item.item_type) {
                        return Err(duplicate(&item.item_type, first, &record.source));
                    }
                    if !new_items.insert(&item.item_type) {
                        return Err(duplicate(&item.item_type, &record.source, &record.source));
                    }
                    // ID предмета тоже уникален (по умолчанию = тип)
                    let id = item.id();
                    if let Some(first) = self.item_id_sources.get(id) {
                        return Err(duplicate(id, first, &record.source));
                    }
                    if !new_item_ids.insert(id) {
                        return Err(duplicate(id, &record.source, &record.source));
                    }
                }
            }
            ResourcePayload::Levels { levels } => {
                for level in levels {
                    let key = format!("level {}", level.number);
                    if let Some(first) = self.level_sources.get(&level.number) {
                        return Err(duplicate(&key, first, &record.source));
                    }
                    if !new_levels.insert(level.number) {
                        return Err(duplicate(&key, &record.source, &record.source));
                    }
                }
            }
        }

        for item_type in new_items {
            self.item_sources.insert(item_type.to_string(), record.source.clone());
        }
        for id in new_item_ids {
            self.item_id_sources.insert(id.to_string(), record.source.clone());
        }
        for number in new_levels {
            self.level_sources.insert(number, record.source.clone());
        }
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ResourceRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    /// Все предметы из всех ресурсов kind = items
    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.records.iter().flat_map(|r| match &r.payload {
            ResourcePayload::Items { items } => items.as_slice(),
            _ => &[],
        })
    }

    /// Все уровни из всех ресурсов kind = levels (в порядке загрузки)
    pub fn levels(&self) -> impl Iterator<Item = &LevelDefinition> {
        self.records.iter().flat_map(|r| match &r.payload {
            ResourcePayload::Levels { levels } => levels.as_slice(),
            _ => &[],
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn duplicate(id: &str, first: &Path, second: &Path) -> CoreError {
    CoreError::DuplicateResource {
        id: id.to_string(),
        first: first.to_path_buf(),
        second: second.to_path_buf(),
    }
}
