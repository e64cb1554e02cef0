use std::sync::Arc;

use chrono::NaiveDate;
use spendbook::domain::{Budget, Category, Expense};
use spendbook::storage::MemoryStore;
use spendbook::store::selectors;
use spendbook::store::{Action, Store};

fn expense(id: &str, amount: f64, category: Category, date: &str, user: &str) -> Expense {
    let mut e = Expense::new(amount, "Test", category, date.parse().unwrap(), user);
    e.id = id.into();
    e
}

#[test]
fn food_budget_scenario_reports_remaining_120() {
    let mut store = Store::open(Arc::new(MemoryStore::new()));
    let mut b1 = Budget::new(Category::Food, 200.0, "u1");
    b1.id = "b1".into();
    store.dispatch(Action::AddBudget(b1)).expect("add budget");
    store
        .dispatch(Action::AddExpense(expense(
            "e1",
            50.0,
            Category::Food,
            "2024-01-01",
            "u1",
        )))
        .expect("add e1");
    store
        .dispatch(Action::AddExpense(expense(
            "e2",
            30.0,
            Category::Food,
            "2024-01-02",
            "u1",
        )))
        .expect("add e2");

    let totals = selectors::totals_by_category(store.state(), "u1");
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[&Category::Food], 80.0);

    let statuses = selectors::budget_statuses(store.state(), "u1");
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].remaining, 120.0);
}

#[test]
fn added_expense_is_visible_to_its_owner_exactly_once() {
    let mut store = Store::open(Arc::new(MemoryStore::new()));
    let added = expense("e1", 42.0, Category::Shopping, "2024-05-05", "u1");
    store
        .dispatch(Action::AddExpense(added.clone()))
        .expect("add expense");

    let mine = selectors::expenses_for_user(store.state(), "u1");
    assert_eq!(mine.len(), 1);
    assert_eq!(*mine[0], added);
    assert!(selectors::expenses_for_user(store.state(), "u2").is_empty());
}

#[test]
fn users_only_see_their_own_aggregates() {
    let mut store = Store::open(Arc::new(MemoryStore::new()));
    store
        .dispatch(Action::AddExpense(expense(
            "e1",
            100.0,
            Category::Housing,
            "2024-01-10",
            "u1",
        )))
        .expect("add u1 expense");
    store
        .dispatch(Action::AddExpense(expense(
            "e2",
            40.0,
            Category::Housing,
            "2024-01-10",
            "u2",
        )))
        .expect("add u2 expense");

    assert_eq!(selectors::expense_total(store.state(), "u1"), 100.0);
    assert_eq!(selectors::expense_total(store.state(), "u2"), 40.0);
    assert_eq!(selectors::expense_total(store.state(), "u3"), 0.0);
}

#[test]
fn full_record_update_changes_category_totals() {
    let mut store = Store::open(Arc::new(MemoryStore::new()));
    store
        .dispatch(Action::AddExpense(expense(
            "e1",
            60.0,
            Category::Food,
            "2024-01-01",
            "u1",
        )))
        .expect("add expense");

    store
        .dispatch(Action::UpdateExpense(expense(
            "e1",
            60.0,
            Category::Entertainment,
            "2024-01-01",
            "u1",
        )))
        .expect("update expense");

    let totals = selectors::totals_by_category(store.state(), "u1");
    assert!(!totals.contains_key(&Category::Food));
    assert_eq!(totals[&Category::Entertainment], 60.0);
}

#[test]
fn recent_spending_series_covers_the_last_seven_days() {
    let mut store = Store::open(Arc::new(MemoryStore::new()));
    store
        .dispatch(Action::AddExpense(expense(
            "e1",
            25.0,
            Category::Food,
            "2024-06-10",
            "u1",
        )))
        .expect("add expense");
    store
        .dispatch(Action::AddExpense(expense(
            "e2",
            15.0,
            Category::Food,
            "2024-06-10",
            "u1",
        )))
        .expect("add second expense");

    let end = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
    let series = selectors::daily_totals(store.state(), "u1", end, 7);
    assert_eq!(series.len(), 7);
    assert_eq!(
        series.first().unwrap().0,
        NaiveDate::from_ymd_opt(2024, 6, 6).unwrap()
    );
    assert_eq!(series.last().unwrap().0, end);
    let tenth = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let on_the_tenth = series.iter().find(|(date, _)| *date == tenth).unwrap();
    assert_eq!(on_the_tenth.1, 40.0);
}
