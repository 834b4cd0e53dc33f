// ============================================
// Accounts - Учётные записи игроков
// ============================================
// Пароли хранятся только как SHA-256 (hex)

use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};
use sha2::{Digest, Sha256};

/// Результат попытки входа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginResult {
    Success,
    IdNotFound,
    PasswordMismatch,
}

/// Реестр аккаунтов: id -> хеш пароля
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accounts {
    hashes: BTreeMap<String, String>,
}

impl Accounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать игрока. false если id пустой или уже занят
    pub fn register(&mut self, id: &str, password: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            log::warn!("[PROFILE] Пустой ID пользователя");
            return false;
        }
        if self.hashes.contains_key(id) {
            log::warn!("[PROFILE] User ID already exists: {}", id);
            return false;
        }

        self.hashes.insert(id.to_string(), hash_password(password));
        log::info!("[PROFILE] New user {} saved", id);
        true
    }

    /// Проверить логин/пароль
    pub fn validate(&self, id: &str, password: &str) -> LoginResult {
        let id = id.trim();
        match self.hashes.get(id) {
            None => {
                log::warn!("[PROFILE] User {} is not found", id);
                LoginResult::IdNotFound
            }
            Some(stored) if *stored == hash_password(password) => LoginResult::Success,
            Some(_) => {
                log::warn!("[PROFILE] User {}'s password does not match", id);
                LoginResult::PasswordMismatch
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.hashes.contains_key(id.trim())
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

/// SHA-256 пароля в виде hex строки (64 символа)
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
