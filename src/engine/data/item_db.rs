// ============================================
// Item DB - Индекс предметов по типу
// ============================================

use std::collections::{BTreeMap, HashMap};

use super::bundle::ResourceBundle;
use super::definition::{DropTier, ItemDefinition};

/// Все предметы из bundle, ключ - тип предмета
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDb {
    items: HashMap<String, ItemDefinition>,
    /// ID предмета -> тип
    ids: BTreeMap<String, String>,
}

impl ItemDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собрать из всех ресурсов kind = items
    pub fn from_bundle(bundle: &ResourceBundle) -> Self {
        let mut db = Self::new();
        for item in bundle.items() {
            db.register(item.clone());
        }
        db
    }

    /// Зарегистрировать предмет (отрицательная цена обнуляется)
    pub fn register(&mut self, mut item: ItemDefinition) {
        if item.cost < 0 {
            log::warn!(
                "[ItemDB] Negative cost for {} -> '{}'. Using 0.",
                item.item_type,
                item.cost
            );
            item.cost = 0;
        }
        if let Some(old) = self.items.get(&item.item_type) {
            if self.ids.get(old.id()) == Some(&item.item_type) {
                self.ids.remove(old.id());
            }
        }
        if let Some(prev) = self.ids.insert(item.id().to_string(), item.item_type.clone()) {
            if prev != item.item_type {
                log::warn!("[ItemDB] ID {} moved from {} to {}", item.id(), prev, item.item_type);
            }
        }
        self.items.insert(item.item_type.clone(), item);
    }

    /// Предмет по типу
    pub fn get(&self, item_type: &str) -> Option<&ItemDefinition> {
        self.items.get(item_type)
    }

    /// Предмет по ID (ID по умолчанию совпадает с типом)
    pub fn get_by_id(&self, id: &str) -> Option<&ItemDefinition> {
        self.ids.get(id).and_then(|item_type| self.items.get(item_type))
    }

    /// Предметы данной редкости, отсортированы по типу
    pub fn items_by_tier(&self, tier: DropTier) -> Vec<&ItemDefinition> {
        let mut items: Vec<_> = self.items.values()
            .filter(|item| item.drop_tier == tier)
            .collect();
        items.sort_by(|a, b| a.item_type.cmp(&b.item_type));
        items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }
}
