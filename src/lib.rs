#![doc(test(attr(deny(warnings))))]

//! Fintrack Core keeps a personal income and expense ledger with named-slot
//! JSON persistence, summaries, monthly series, and CSV export. The `cli`
//! module and the `fintrack_cli` binary wrap it in an interactive shell.

pub mod cli;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod store;
pub mod tracker;
pub mod utils;

pub use errors::{Result, TrackerError};
pub use ledger::{Ledger, MonthlyTotals, Summary, TransactionFilter};
pub use tracker::{ChangeEvent, Tracker};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
