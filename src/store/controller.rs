use std::sync::Arc;

use crate::errors::Result;
use crate::storage::StorageBackend;

use super::state::{reduce, Action, StoreState};

/// Controller that owns the current state snapshot and coordinates
/// persistence.
///
/// Callers read the snapshot and dispatch actions; the state is never
/// mutated directly. After every dispatched action the full snapshot is
/// committed to the injected storage backend.
pub struct Store {
    state: StoreState,
    storage: Arc<dyn StorageBackend>,
}

impl Store {
    /// Opens the store, rehydrating both collections from storage.
    ///
    /// Absent or unreadable snapshots fall back to empty collections; no
    /// error is surfaced at load time.
    pub fn open(storage: Arc<dyn StorageBackend>) -> Self {
        let mut state = StoreState::default();
        match storage.load_expenses() {
            Ok(Some(expenses)) => state = reduce(&state, Action::SetExpenses(expenses)),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("discarding unreadable expenses snapshot: {err}");
            }
        }
        match storage.load_budgets() {
            Ok(Some(budgets)) => state = reduce(&state, Action::SetBudgets(budgets)),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("discarding unreadable budgets snapshot: {err}");
            }
        }
        Self { state, storage }
    }

    /// Current snapshot, for selectors and rendering.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Applies an action and commits the resulting snapshot.
    ///
    /// Commit failures propagate to the caller; the in-memory state keeps
    /// the applied action so a later dispatch can retry the write.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.state = reduce(&self.state, action);
        self.commit()
    }

    fn commit(&self) -> Result<()> {
        self.storage.save_expenses(&self.state.expenses)?;
        self.storage.save_budgets(&self.state.budgets)?;
        Ok(())
    }
}
