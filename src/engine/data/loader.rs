// ============================================
// Data Loader - Загрузка ResourceBundle
// ============================================
// Загрузчик подставляется в Core; тесты передают свой

use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::core::CoreError;

use super::bundle::{ResourceBundle, ResourceRecord};
use super::definition::ResourceFile;

/// Расширение файлов ресурсов
const RESOURCE_EXTENSION: &str = "json";

/// Источник ресурсов для Core::initialize
pub trait DataLoader {
    /// Загрузить весь bundle целиком или вернуть ошибку
    fn load(&self, location: &Path) -> Result<ResourceBundle, CoreError>;
}

/// Любое замыкание с подходящей сигнатурой - тоже загрузчик
impl<F> DataLoader for F
where
    F: Fn(&Path) -> Result<ResourceBundle, CoreError>,
{
    fn load(&self, location: &Path) -> Result<ResourceBundle, CoreError> {
        self(location)
    }
}

/// Загрузчик из каталога: все *.json на верхнем уровне, по имени файла
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl FsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Файлы ресурсов каталога в детерминированном порядке
    fn resource_files(dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                log::debug!("[DATA] Пропуск {}: не файл", path.display());
                continue;
            }
            if path.extension().map_or(false, |ext| ext == RESOURCE_EXTENSION) {
                files.push(path);
            } else {
                log::debug!("[DATA] Пропуск {}: не .{}", path.display(), RESOURCE_EXTENSION);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Разобрать один файл ресурса
    pub fn load_file(path: &Path) -> Result<ResourceRecord, CoreError> {
        let bytes = fs::read(path)?;
        let file = ResourceFile::from_slice(&bytes).map_err(|e| CoreError::parse(path, e))?;
        Ok(ResourceRecord::from_file(file, path))
    }
}

impl DataLoader for FsLoader {
    fn load(&self, location: &Path) -> Result<ResourceBundle, CoreError> {
        if !location.is_dir() {
            return Err(CoreError::ResourceNotFound(location.to_path_buf()));
        }

        let mut bundle = ResourceBundle::new();
        for path in Self::resource_files(location)? {
            let record = Self::load_file(&path)?;
            log::debug!("[DATA] {} ({}) из {}", record.id, record.payload.kind(), path.display());
            bundle.insert(record)?;
        }

        log::info!("[DATA] Загружено ресурсов: {} из {}", bundle.len(), location.display());
        Ok(bundle)
    }
}
