#![doc(test(attr(deny(warnings))))]

//! Spendbook provides the data layer for a personal budget tracker: an
//! action-driven store of expenses and budgets, pure derived selectors,
//! a local auth session, and JSON snapshot persistence.

pub mod auth;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendbook tracing initialized.");
    });
}
