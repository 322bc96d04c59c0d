use chrono::NaiveDate;

use crate::domain::{CategoryId, EntryKind, Transaction};

use super::Ledger;

/// Conjunctive constraints for listing transactions. `None` on an axis
/// means no restriction there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<EntryKind>,
    pub category_id: Option<CategoryId>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl TransactionFilter {
    /// True when the transaction satisfies every supplied constraint. Date
    /// bounds are inclusive on both ends.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if transaction.category_id != category_id {
                return false;
            }
        }
        if let Some(from) = self.from {
            if transaction.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if transaction.date > to {
                return false;
            }
        }
        true
    }
}

impl Ledger {
    /// Transactions matching every supplied constraint, in insertion order.
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions()
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }
}
