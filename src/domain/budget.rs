use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// A spending ceiling for one category, owned by one user.
///
/// The data model does not deduplicate budgets per (user, category);
/// duplicates are reported independently by the selectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category: Category,
    pub amount: f64,
    pub user_id: String,
}

impl Budget {
    pub fn new(category: Category, amount: f64, user_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            amount,
            user_id: user_id.into(),
        }
    }
}
