//! # Local Session Store
//!
//! Flat string-keyed store backing session persistence: the serialized user
//! profile, auth token and expiry, remember-me state, and the language
//! preference. Values are read and written wholesale to a single JSON file,
//! matching the semantics of the key-value store the mobile builds used.
//!
//! This is deliberately not a database; nothing in the domain lives here.

use crate::core::error::{AppError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Well-known store keys.
pub mod keys {
    pub const USER: &str = "user";
    pub const TOKEN: &str = "token";
    pub const IS_AUTHENTICATED: &str = "isAuthenticated";
    pub const TOKEN_EXPIRY: &str = "tokenExpiry";
    pub const REMEMBER_ME: &str = "rememberMe";
    pub const REMEMBERED_EMAIL: &str = "rememberedEmail";
    pub const LANGUAGE: &str = "language";

    /// Every key the sign-out flow clears.
    pub const ALL: &[&str] = &[
        USER,
        TOKEN,
        IS_AUTHENTICATED,
        TOKEN_EXPIRY,
        REMEMBER_ME,
        REMEMBERED_EMAIL,
        LANGUAGE,
    ];
}

/// File-backed key-value store.
pub struct SessionStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl SessionStore {
    /// Default store location next to the binary.
    pub const DEFAULT_PATH: &'static str = "./aflaguard-session.json";

    /// Open a store, loading existing values if the file is present.
    /// A missing file is an empty store, not an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| AppError::Storage(format!("corrupt session store: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Read a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Write a value and persist the whole store.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.save()
    }

    /// Remove a value and persist.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        self.save()
    }

    /// Remove several keys in one write (sign-out clears the whole set).
    pub fn multi_remove(&mut self, keys: &[&str]) -> Result<()> {
        for key in keys {
            self.values.remove(*key);
        }
        self.save()
    }

    fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_store_path() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "aflaguard-store-test-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let store = SessionStore::open(temp_store_path()).unwrap();
        assert_eq!(store.get(keys::TOKEN), None);
    }

    #[test]
    fn values_round_trip_through_the_file() {
        let path = temp_store_path();
        {
            let mut store = SessionStore::open(&path).unwrap();
            store.set(keys::TOKEN, "jwt").unwrap();
            store.set(keys::LANGUAGE, "rw").unwrap();
        }
        let store = SessionStore::open(&path).unwrap();
        assert_eq!(store.get(keys::TOKEN), Some("jwt"));
        assert_eq!(store.get(keys::LANGUAGE), Some("rw"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn multi_remove_clears_sign_out_keys() {
        let path = temp_store_path();
        let mut store = SessionStore::open(&path).unwrap();
        store.set(keys::USER, "{}").unwrap();
        store.set(keys::TOKEN, "jwt").unwrap();
        store.set(keys::REMEMBERED_EMAIL, "a@b.rw").unwrap();
        store.multi_remove(keys::ALL).unwrap();
        assert_eq!(store.get(keys::USER), None);
        assert_eq!(store.get(keys::TOKEN), None);
        assert_eq!(store.get(keys::REMEMBERED_EMAIL), None);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_store_is_reported() {
        let path = temp_store_path();
        std::fs::write(&path, "not json").unwrap();
        assert!(SessionStore::open(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
