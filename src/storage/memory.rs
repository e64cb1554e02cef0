use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Budget, Expense, User, UserRecord};
use crate::errors::{Result, StoreError};

use super::StorageBackend;

/// In-process storage backend used as a test double.
///
/// Values are kept as serialized JSON per key so the same encode/decode
/// path runs as with the file-backed store. Writes can be made to fail
/// on demand to exercise error handling.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<&'static str, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail until switched back off.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(format!(
                "simulated write failure for key `{}`",
                key
            )));
        }
        let raw = serde_json::to_string(value)?;
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, raw);
        Ok(())
    }

    fn remove(&self, key: &'static str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}

impl StorageBackend for MemoryStore {
    fn load_expenses(&self) -> Result<Option<Vec<Expense>>> {
        self.read("expenses")
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.write("expenses", &expenses)
    }

    fn load_budgets(&self) -> Result<Option<Vec<Budget>>> {
        self.read("budgets")
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.write("budgets", &budgets)
    }

    fn load_session(&self) -> Result<Option<User>> {
        self.read("user")
    }

    fn save_session(&self, user: &User) -> Result<()> {
        self.write("user", user)
    }

    fn clear_session(&self) -> Result<()> {
        self.remove("user")
    }

    fn load_users(&self) -> Result<Option<Vec<UserRecord>>> {
        self.read("users")
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<()> {
        self.write("users", &users)
    }
}
