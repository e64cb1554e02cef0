use crate::domain::{Budget, Expense};

/// Snapshot of the authoritative collections held by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
}

/// Fixed action vocabulary accepted by the store.
///
/// `SetExpenses` and `SetBudgets` replace a collection wholesale and are
/// used when rehydrating from storage at startup.
#[derive(Debug, Clone)]
pub enum Action {
    AddExpense(Expense),
    DeleteExpense(String),
    UpdateExpense(Expense),
    AddBudget(Budget),
    UpdateBudget(Budget),
    DeleteBudget(String),
    SetExpenses(Vec<Expense>),
    SetBudgets(Vec<Budget>),
}

/// Applies an action to a snapshot, producing a brand-new state value.
///
/// Deletes remove every record with a matching id and updates replace the
/// record whose id matches; both are silent no-ops when the id is absent.
/// Adds append without deduplication; id uniqueness is the caller's
/// precondition. Insertion order is preserved throughout.
pub fn reduce(state: &StoreState, action: Action) -> StoreState {
    match action {
        Action::AddExpense(expense) => {
            let mut expenses = state.expenses.clone();
            expenses.push(expense);
            StoreState {
                expenses,
                budgets: state.budgets.clone(),
            }
        }
        Action::DeleteExpense(id) => StoreState {
            expenses: state
                .expenses
                .iter()
                .filter(|expense| expense.id != id)
                .cloned()
                .collect(),
            budgets: state.budgets.clone(),
        },
        Action::UpdateExpense(updated) => StoreState {
            expenses: state
                .expenses
                .iter()
                .map(|expense| {
                    if expense.id == updated.id {
                        updated.clone()
                    } else {
                        expense.clone()
                    }
                })
                .collect(),
            budgets: state.budgets.clone(),
        },
        Action::AddBudget(budget) => {
            let mut budgets = state.budgets.clone();
            budgets.push(budget);
            StoreState {
                expenses: state.expenses.clone(),
                budgets,
            }
        }
        Action::UpdateBudget(updated) => StoreState {
            expenses: state.expenses.clone(),
            budgets: state
                .budgets
                .iter()
                .map(|budget| {
                    if budget.id == updated.id {
                        updated.clone()
                    } else {
                        budget.clone()
                    }
                })
                .collect(),
        },
        Action::DeleteBudget(id) => StoreState {
            expenses: state.expenses.clone(),
            budgets: state
                .budgets
                .iter()
                .filter(|budget| budget.id != id)
                .cloned()
                .collect(),
        },
        Action::SetExpenses(expenses) => StoreState {
            expenses,
            budgets: state.budgets.clone(),
        },
        Action::SetBudgets(budgets) => StoreState {
            expenses: state.expenses.clone(),
            budgets,
        },
    }
}
