pub mod json_store;
pub mod memory;

use crate::domain::{Budget, Expense, User, UserRecord};
use crate::errors::Result;

/// Abstraction over the durable key-value persistence used by the store
/// and the auth session.
///
/// Loads return `Ok(None)` when the key has never been written and `Err`
/// when the stored content cannot be read or parsed; callers decide the
/// fallback. Saves overwrite the key wholesale.
pub trait StorageBackend: Send + Sync {
    fn load_expenses(&self) -> Result<Option<Vec<Expense>>>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<()>;
    fn load_budgets(&self) -> Result<Option<Vec<Budget>>>;
    fn save_budgets(&self, budgets: &[Budget]) -> Result<()>;
    fn load_session(&self) -> Result<Option<User>>;
    fn save_session(&self, user: &User) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
    fn load_users(&self) -> Result<Option<Vec<UserRecord>>>;
    fn save_users(&self, users: &[UserRecord]) -> Result<()>;
}

pub use json_store::JsonStore;
pub use memory::MemoryStore;
