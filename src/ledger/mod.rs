//! Core ledger state, filtering, and aggregation.

pub mod filter;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use filter::TransactionFilter;
pub use ledger::Ledger;
pub use summary::{MonthlyTotals, Summary};
