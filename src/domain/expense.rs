use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A single recorded expense belonging to one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub user_id: String,
}

impl Expense {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            amount,
            description: description.into(),
            category,
            date,
            user_id: user_id.into(),
        }
    }
}
