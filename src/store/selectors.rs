//! Pure derived reads over a store snapshot.
//!
//! Every selector filters by owning user and is re-derived on each call;
//! nothing here is memoized. Insertion order is preserved wherever a list
//! comes back.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::domain::{Budget, Category, Expense};

use super::state::StoreState;

/// A user's expenses in insertion order.
pub fn expenses_for_user<'a>(state: &'a StoreState, user_id: &str) -> Vec<&'a Expense> {
    state
        .expenses
        .iter()
        .filter(|expense| expense.user_id == user_id)
        .collect()
}

/// A user's budgets in insertion order.
pub fn budgets_for_user<'a>(state: &'a StoreState, user_id: &str) -> Vec<&'a Budget> {
    state
        .budgets
        .iter()
        .filter(|budget| budget.user_id == user_id)
        .collect()
}

/// Sums a user's expenses per category. Categories without expenses are
/// absent from the map, never zero-valued entries.
pub fn totals_by_category(state: &StoreState, user_id: &str) -> BTreeMap<Category, f64> {
    expenses_for_user(state, user_id)
        .into_iter()
        .fold(BTreeMap::new(), |mut totals, expense| {
            *totals.entry(expense.category).or_insert(0.0) += expense.amount;
            totals
        })
}

/// Grand total of a user's expenses; 0 when there are none.
pub fn expense_total(state: &StoreState, user_id: &str) -> f64 {
    expenses_for_user(state, user_id)
        .into_iter()
        .map(|expense| expense.amount)
        .sum()
}

/// Spending position of one budget against the owner's category total.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
}

/// One status row per budget, in insertion order. Duplicate budgets for
/// the same category each get their own row against the same spent total.
pub fn budget_statuses(state: &StoreState, user_id: &str) -> Vec<BudgetStatus> {
    let totals = totals_by_category(state, user_id);
    budgets_for_user(state, user_id)
        .into_iter()
        .map(|budget| {
            let spent = totals.get(&budget.category).copied().unwrap_or(0.0);
            BudgetStatus {
                budget: budget.clone(),
                spent,
                remaining: budget.amount - spent,
                percent_used: percent_of(spent, budget.amount),
            }
        })
        .collect()
}

/// Overall budget utilization as a percentage capped at 100; 0 when the
/// user has no budget.
pub fn budget_utilization(state: &StoreState, user_id: &str) -> f64 {
    let total_budget: f64 = budgets_for_user(state, user_id)
        .into_iter()
        .map(|budget| budget.amount)
        .sum();
    percent_of(expense_total(state, user_id), total_budget)
}

/// Per-day spending for the `days`-day window ending at `end` inclusive,
/// oldest first. Days without expenses appear with a zero total so the
/// series is suitable for a trend chart.
pub fn daily_totals(
    state: &StoreState,
    user_id: &str,
    end: NaiveDate,
    days: u64,
) -> Vec<(NaiveDate, f64)> {
    let expenses = expenses_for_user(state, user_id);
    (0..days)
        .rev()
        .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
        .map(|date| {
            let total = expenses
                .iter()
                .filter(|expense| expense.date == date)
                .map(|expense| expense.amount)
                .sum();
            (date, total)
        })
        .collect()
}

fn percent_of(spent: f64, ceiling: f64) -> f64 {
    if ceiling > 0.0 {
        (spent / ceiling * 100.0).min(100.0)
    } else {
        0.0
    }
}
