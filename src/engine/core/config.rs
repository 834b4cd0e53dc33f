// ============================================
// Config - Настройки движка
// ============================================
// engine.toml (все ключи необязательны) + переопределения из env

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::error::CoreError;

/// Каталог ресурсов по умолчанию
pub const DATA_DIR: &str = "game_data";

/// Файл профиля игроков
pub const SAVE_FILE: &str = "profile.dat";

/// Файл настроек
pub const CONFIG_FILE: &str = "engine.toml";

/// Сколько шагов делает один вызов run()
pub const DEFAULT_MAX_TICKS: u64 = 100_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Итоговые настройки движка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub data_dir: PathBuf,
    /// None = профиль не сохраняется
    pub save_file: Option<PathBuf>,
    pub max_ticks: u64,
    pub log_level: String,
}

/// engine.toml как он лежит на диске
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    data_dir: Option<PathBuf>,
    save_file: Option<String>,
    max_ticks: Option<u64>,
    log_level: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DATA_DIR),
            save_file: Some(PathBuf::from(SAVE_FILE)),
            max_ticks: DEFAULT_MAX_TICKS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl EngineConfig {
    /// Файл настроек + переменные окружения
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let mut cfg = Self::from_file(path)?;
        cfg.apply_env(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Только файл настроек. Нет файла - значения по умолчанию
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml(&txt).map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml(txt: &str) -> Result<Self, String> {
        let raw: RawConfig = toml::from_str(txt).map_err(|e| e.to_string())?;
        let mut cfg = Self::default();
        if let Some(dir) = raw.data_dir {
            cfg.data_dir = dir;
        }
        if let Some(save) = raw.save_file {
            cfg.save_file = save_path(&save);
        }
        if let Some(ticks) = raw.max_ticks {
            cfg.max_ticks = ticks;
        }
        if let Some(level) = raw.log_level {
            cfg.log_level = level;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Переопределения: ENGINE_DATA_DIR, ENGINE_SAVE_FILE, ENGINE_MAX_TICKS, ENGINE_LOG
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = var("ENGINE_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(save) = var("ENGINE_SAVE_FILE") {
            self.save_file = save_path(&save);
        }
        if let Some(ticks) = var("ENGINE_MAX_TICKS") {
            self.max_ticks = ticks
                .trim()
                .parse()
                .map_err(|_| CoreError::Config(format!("ENGINE_MAX_TICKS: '{}'", ticks)))?;
        }
        if let Some(level) = var("ENGINE_LOG") {
            self.log_level = level;
        }
        self.validate().map_err(CoreError::Config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.max_ticks == 0 {
            return Err("max_ticks must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_save_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_file = Some(path.into());
        self
    }

    pub fn without_save(mut self) -> Self {
        self.save_file = None;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }
}

/// Пустая строка отключает сохранение
fn save_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(PathBuf::from(value)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EngineConfig::from_file(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(cfg, EngineConfig::default());
        assert_eq!(cfg.data_dir, PathBuf::from("game_data"));
        assert_eq!(cfg.save_file, Some(PathBuf::from("profile.dat")));
    }

    #[test]
    fn test_toml_partial() {
        let cfg = EngineConfig::from_toml("data_dir = \"assets/data\"\nmax_ticks = 500\n").unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("assets/data"));
        assert_eq!(cfg.max_ticks, 500);
        assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);

        let cfg = EngineConfig::from_toml("save_file = \"\"").unwrap();
        assert_eq!(cfg.save_file, None);
    }

    #[test]
    fn test_toml_errors() {
        assert!(EngineConfig::from_toml("max_ticks = \"many\"").is_err());
        assert!(EngineConfig::from_toml("max_ticks = 0").is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "data_dir = [").unwrap();
        assert!(matches!(EngineConfig::from_file(&path), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("ENGINE_DATA_DIR", "/srv/game_data"),
            ("ENGINE_SAVE_FILE", " "),
            ("ENGINE_MAX_TICKS", "250"),
            ("ENGINE_LOG", "debug"),
        ]);
        let mut cfg = EngineConfig::default();
        cfg.apply_env(|key| env.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(cfg.data_dir, PathBuf::from("/srv/game_data"));
        assert_eq!(cfg.save_file, None);
        assert_eq!(cfg.max_ticks, 250);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn test_env_bad_ticks() {
        let mut cfg = EngineConfig::default();
        let err = cfg
            .apply_env(|key| (key == "ENGINE_MAX_TICKS").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }
}
