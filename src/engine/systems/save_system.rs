// ============================================
// Save System - Загрузка и сохранение профиля
// ============================================

use std::path::Path;

use crate::engine::core::CoreError;
use crate::engine::profile::Profile;
use crate::engine::save::ProfileFile;

/// Система сохранения/загрузки
pub struct SaveSystem;

impl SaveSystem {
    /// Загрузить профиль из файла или создать новый.
    /// Нет файла - новый профиль; битый файл - ошибка
    pub fn load_or_create(save_file: Option<&Path>) -> Result<Profile, CoreError> {
        let Some(path) = save_file else {
            log::debug!("[SAVE] Сохранение отключено, новый профиль");
            return Ok(Profile::new());
        };

        if !path.exists() {
            log::info!("[SAVE] Новый профиль ({} не найден)", path.display());
            return Ok(Profile::new());
        }

        let profile = ProfileFile::load(path).map_err(|e| {
            log::error!("[SAVE] Ошибка загрузки {}: {}", path.display(), e);
            e
        })?;
        log::info!(
            "[SAVE] Загружен профиль из {} (игроков: {})",
            path.display(),
            profile.accounts.len()
        );
        Ok(profile)
    }

    /// Сохранить профиль (если сохранение включено)
    pub fn save_profile(save_file: Option<&Path>, profile: &Profile) -> Result<(), CoreError> {
        let Some(path) = save_file else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        ProfileFile::save(path, profile)?;
        log::info!(
            "[SAVE] Профиль сохранён в {} (игроков: {})",
            path.display(),
            profile.accounts.len()
        );
        Ok(())
    }
}
