// ============================================
// Data - Ресурсы движка
// ============================================
// Data-Driven Architecture: предметы и уровни загружаются из JSON (game_data/)

mod bundle;
mod definition;
mod item_db;
mod loader;

pub use bundle::*;
pub use definition::*;
pub use item_db::*;
pub use loader::*;
