use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{Budget, Expense, User, UserRecord};
use crate::errors::Result;
use crate::utils::app_data_dir;

use super::StorageBackend;

const EXPENSES_KEY: &str = "expenses";
const BUDGETS_KEY: &str = "budgets";
const SESSION_KEY: &str = "user";
const USERS_KEY: &str = "users";
const TMP_SUFFIX: &str = "tmp";

/// File-per-key JSON persistence rooted at the application data directory.
///
/// Each key maps to `<root>/<key>.json`; writes go through a temp file and
/// rename so a failed write never corrupts the previous snapshot.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let json = serde_json::to_string_pretty(value)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

impl StorageBackend for JsonStore {
    fn load_expenses(&self) -> Result<Option<Vec<Expense>>> {
        self.read_key(EXPENSES_KEY)
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        self.write_key(EXPENSES_KEY, &expenses)
    }

    fn load_budgets(&self) -> Result<Option<Vec<Budget>>> {
        self.read_key(BUDGETS_KEY)
    }

    fn save_budgets(&self, budgets: &[Budget]) -> Result<()> {
        self.write_key(BUDGETS_KEY, &budgets)
    }

    fn load_session(&self) -> Result<Option<User>> {
        self.read_key(SESSION_KEY)
    }

    fn save_session(&self, user: &User) -> Result<()> {
        self.write_key(SESSION_KEY, user)
    }

    fn clear_session(&self) -> Result<()> {
        self.remove_key(SESSION_KEY)
    }

    fn load_users(&self) -> Result<Option<Vec<UserRecord>>> {
        self.read_key(USERS_KEY)
    }

    fn save_users(&self, users: &[UserRecord]) -> Result<()> {
        self.write_key(USERS_KEY, &users)
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
