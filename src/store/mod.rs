//! Action-driven state container for expenses and budgets, plus the pure
//! selectors derived from its snapshots.

pub mod controller;
pub mod selectors;
pub mod state;

pub use controller::Store;
pub use state::{reduce, Action, StoreState};
