//! Domain models shared by the store, selectors, and auth session.

pub mod budget;
pub mod category;
pub mod expense;
pub mod user;

pub use budget::Budget;
pub use category::{Category, ParseCategoryError};
pub use expense::Expense;
pub use user::{User, UserRecord};
