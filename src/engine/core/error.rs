// ============================================
// Errors - Ошибки ядра движка
// ============================================

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::save::SaveError;

/// Все ошибки, которые ядро отдаёт вызывающему коду
#[derive(Debug, Error)]
pub enum CoreError {
    /// Каталог ресурсов отсутствует
    #[error("resource location not found: {}", .0.display())]
    ResourceNotFound(PathBuf),

    /// Файл ресурса не разобран
    #[error("malformed resource {}: {reason}", .path.display())]
    ResourceParse { path: PathBuf, reason: String },

    /// Идентификатор объявлен дважды
    #[error("duplicate identifier `{id}` in {} (first declared in {})", .second.display(), .first.display())]
    DuplicateResource {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("engine is not initialized")]
    NotInitialized,

    #[error("engine is already initialized")]
    AlreadyInitialized,

    /// Ошибка во время шага движка
    #[error("runtime failure at tick {tick}: {reason}")]
    Runtime { tick: u64, reason: String },

    #[error("invalid engine config: {0}")]
    Config(String),

    #[error("profile save: {0}")]
    Save(#[from] SaveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    pub fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CoreError::ResourceParse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
