// ============================================
// Profile File - Чтение/запись файла профиля
// ============================================
// Формат:
// [SaveHeader, bincode][тело, bincode + ZSTD]
//
// Заголовок фиксированного размера, поэтому его можно прочитать
// без распаковки тела.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::engine::profile::{Accounts, Achievements, HighScores, Profile, UserStats};

use super::header::{SaveHeader, MAGIC_NUMBER, SAVE_VERSION};

/// Уровень сжатия ZSTD
const COMPRESSION_LEVEL: i32 = 3;

/// Тело файла (сжимается ZSTD)
#[derive(Debug, Serialize, Deserialize)]
struct SaveBody {
    accounts: Accounts,
    stats: BTreeMap<String, UserStats>,
    scores: HighScores,
    achievements: Achievements,
}

/// Ошибки сохранения/загрузки
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize: {0}")]
    Serialize(String),
    #[error("deserialize: {0}")]
    Deserialize(String),
    #[error("invalid magic number")]
    InvalidMagic,
    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
    #[error("compression: {0}")]
    Compression(String),
}

/// Основной интерфейс для работы с файлом профиля
pub struct ProfileFile;

impl ProfileFile {
    /// Сохранить профиль в файл.
    /// Пишется во временный файл рядом и переименовывается поверх старого
    pub fn save(path: impl AsRef<Path>, profile: &Profile) -> Result<(), SaveError> {
        let path = path.as_ref();
        let tmp_path = tmp_path(path);

        let result = Self::write_to(&tmp_path, profile)
            .and_then(|()| std::fs::rename(&tmp_path, path).map_err(SaveError::from));
        if result.is_err() {
            let _ = std::fs::remove_file(&tmp_path);
        }
        result
    }

    fn write_to(path: &Path, profile: &Profile) -> Result<(), SaveError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        // 1. Записываем заголовок
        let header = SaveHeader::new(profile.accounts.len() as u32);
        let header_bytes = bincode::serialize(&header)
            .map_err(|e| SaveError::Serialize(e.to_string()))?;
        writer.write_all(&header_bytes)?;

        // 2. Сериализуем и сжимаем тело
        let body = SaveBody {
            accounts: profile.accounts.clone(),
            stats: profile.stats.clone(),
            scores: profile.scores.clone(),
            achievements: profile.achievements.clone(),
        };
        let body_bytes = bincode::serialize(&body)
            .map_err(|e| SaveError::Serialize(e.to_string()))?;

        let compressed = zstd::encode_all(&body_bytes[..], COMPRESSION_LEVEL)
            .map_err(|e| SaveError::Compression(e.to_string()))?;
        writer.write_all(&compressed)?;

        writer.flush()?;
        Ok(())
    }

    /// Загрузить профиль из файла
    pub fn load(path: impl AsRef<Path>) -> Result<Profile, SaveError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        // 1. Читаем заголовок
        let header_size = bincode::serialized_size(&SaveHeader::default())
            .map_err(|e| SaveError::Serialize(e.to_string()))? as usize;
        let mut header_bytes = vec![0u8; header_size];
        reader.read_exact(&mut header_bytes)?;

        let header: SaveHeader = bincode::deserialize(&header_bytes)
            .map_err(|e| SaveError::Deserialize(e.to_string()))?;

        if header.magic != MAGIC_NUMBER {
            return Err(SaveError::InvalidMagic);
        }
        if header.version != SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion(header.version));
        }

        // 2. Читаем и распаковываем тело
        let mut compressed = Vec::new();
        reader.read_to_end(&mut compressed)?;

        let body_bytes = zstd::decode_all(&compressed[..])
            .map_err(|e| SaveError::Compression(e.to_string()))?;

        let body: SaveBody = bincode::deserialize(&body_bytes)
            .map_err(|e| SaveError::Deserialize(e.to_string()))?;

        if body.accounts.len() as u32 != header.users {
            log::warn!(
                "[SAVE] Заголовок: {} игроков, в теле: {}",
                header.users,
                body.accounts.len()
            );
        }

        Ok(Profile {
            accounts: body.accounts,
            stats: body.stats,
            scores: body.scores,
            achievements: body.achievements,
        })
    }
}

/// profile.dat -> profile.dat.tmp
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::profile::{PlayMode, StatKind};

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.dat");

        let mut profile = Profile::new();
        profile.register("alice", "pass123");
        profile.stats_mut("alice").upgrade_stat(StatKind::Critical);
        profile.stats_mut("alice").spend_coin(15);
        profile.submit_score(PlayMode::TwoPlayer, "alice", 4200);
        profile.unlock_achievements(PlayMode::OnePlayer, "alice", &[false, true]);

        ProfileFile::save(&path, &profile).unwrap();
        let loaded = ProfileFile::load(&path).unwrap();

        assert_eq!(loaded, profile);
        assert_eq!(loaded.stats("alice").unwrap().coin(), 85);
        assert_eq!(loaded.high_scores(PlayMode::TwoPlayer)[0].value, 4200);
        assert!(loaded.achievements(PlayMode::OnePlayer, "alice")[1]);
        assert!(!path.with_extension("dat.tmp").exists());
    }

    #[test]
    fn test_failed_save_keeps_old_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.dat");

        let mut old = Profile::new();
        old.register("alice", "pass123");
        ProfileFile::save(&path, &old).unwrap();

        // Временный файл занят каталогом - запись падает до переименования
        std::fs::create_dir(dir.path().join("profile.dat.tmp")).unwrap();
        let mut new = old.clone();
        new.register("bob", "pw");
        assert!(ProfileFile::save(&path, &new).is_err());

        assert_eq!(ProfileFile::load(&path).unwrap(), old);
    }

    #[test]
    fn test_rejects_foreign_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.dat");
        std::fs::write(&path, b"RUST\x01\x00\x00\x00\x00\x00\x00\x00garbage").unwrap();

        assert!(matches!(ProfileFile::load(&path), Err(SaveError::InvalidMagic)));
    }

    #[test]
    fn test_rejects_newer_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.dat");

        let mut header = SaveHeader::new(0);
        header.version = SAVE_VERSION + 1;
        std::fs::write(&path, bincode::serialize(&header).unwrap()).unwrap();

        assert!(matches!(
            ProfileFile::load(&path),
            Err(SaveError::UnsupportedVersion(v)) if v == SAVE_VERSION + 1
        ));
    }
}
