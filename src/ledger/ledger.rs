use chrono::NaiveDate;

use crate::currency::CurrencyCode;
use crate::domain::{Category, CategoryId, EntryKind, Transaction, TransactionId};
use crate::errors::{Result, TrackerError};

/// In-memory ledger state: the category and transaction collections, the id
/// counters, and the selected display currency.
///
/// The ledger performs no I/O. Persistence and change notification live in
/// [`crate::tracker::Tracker`].
#[derive(Debug, Clone)]
pub struct Ledger {
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    next_category_id: CategoryId,
    next_transaction_id: TransactionId,
    currency: CurrencyCode,
}

impl Ledger {
    /// Fresh ledger with the default category seed and no transactions.
    pub fn new() -> Self {
        let categories = Category::default_set();
        let next_category_id = next_id(categories.iter().map(|category| category.id));
        Self {
            categories,
            transactions: Vec::new(),
            next_category_id,
            next_transaction_id: 1,
            currency: CurrencyCode::default(),
        }
    }

    /// Rebuilds a ledger from persisted collections. Counters restart just
    /// past the highest id present, so future ids never collide.
    pub fn from_parts(
        categories: Vec<Category>,
        transactions: Vec<Transaction>,
        currency: CurrencyCode,
    ) -> Self {
        let next_category_id = next_id(categories.iter().map(|category| category.id));
        let next_transaction_id = next_id(transactions.iter().map(|txn| txn.id));
        Self {
            categories,
            transactions,
            next_category_id,
            next_transaction_id,
            currency,
        }
    }

    /// Records a new transaction and returns it. The amount must be a
    /// finite, non-negative number; the category id is stored as given and
    /// not required to resolve.
    pub fn add_transaction(
        &mut self,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        category_id: CategoryId,
        notes: impl Into<String>,
    ) -> Result<Transaction> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(TrackerError::Validation(format!(
                "amount must be a non-negative number, got {amount}"
            )));
        }
        let transaction = Transaction::new(
            self.next_transaction_id,
            kind,
            amount,
            date,
            category_id,
            notes,
        );
        self.next_transaction_id += 1;
        self.transactions.push(transaction.clone());
        Ok(transaction)
    }

    /// Removes and returns the transaction with the given id. Unknown ids
    /// are a no-op, not an error.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Adds a category. The name is trimmed and must be non-empty and
    /// unique (case-insensitive) among categories of the same kind.
    pub fn add_category(&mut self, name: &str, kind: EntryKind) -> Result<Category> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TrackerError::Validation(
                "category name cannot be empty".into(),
            ));
        }
        if self.category_name_taken(trimmed, kind) {
            return Err(TrackerError::DuplicateCategory {
                name: trimmed.to_string(),
                kind: kind.to_string(),
            });
        }
        let category = Category::new(self.next_category_id, trimmed, kind);
        self.next_category_id += 1;
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Removes and returns the category with the given id. Fails while any
    /// transaction still references it; unknown ids are a no-op.
    pub fn remove_category(&mut self, id: CategoryId) -> Result<Option<Category>> {
        if self.transactions.iter().any(|txn| txn.category_id == id) {
            return Err(TrackerError::CategoryInUse(id));
        }
        let index = self
            .categories
            .iter()
            .position(|category| category.id == id);
        Ok(index.map(|index| self.categories.remove(index)))
    }

    /// Switches the display currency. Amounts are never converted.
    pub fn set_currency(&mut self, code: &str) -> Result<CurrencyCode> {
        let validated = CurrencyCode::validated(code)?;
        self.currency = validated.clone();
        Ok(validated)
    }

    /// Drops every transaction and restores the default category seed. The
    /// currency selection is kept.
    pub fn clear_all(&mut self) {
        self.categories = Category::default_set();
        self.transactions.clear();
        self.next_category_id = next_id(self.categories.iter().map(|category| category.id));
        self.next_transaction_id = 1;
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn next_category_id(&self) -> CategoryId {
        self.next_category_id
    }

    pub fn next_transaction_id(&self) -> TransactionId {
        self.next_transaction_id
    }

    fn category_name_taken(&self, candidate: &str, kind: EntryKind) -> bool {
        let normalized = candidate.to_ascii_lowercase();
        self.categories.iter().any(|category| {
            category.kind == kind && category.name.trim().to_ascii_lowercase() == normalized
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().unwrap_or(0) + 1
}
