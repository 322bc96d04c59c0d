//! The tracker facade: binds a ledger to a storage backend, persists every
//! successful mutation, and notifies subscribed listeners.

use std::collections::HashSet;
use std::io::Write;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{info, warn};

use crate::currency::CurrencyCode;
use crate::domain::{Category, CategoryId, EntryKind, Transaction, TransactionId};
use crate::errors::Result;
use crate::export;
use crate::ledger::Ledger;
use crate::store::{Slot, StorageBackend};

/// Which part of the ledger a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Transactions,
    Categories,
    Currency,
    Reset,
}

type Listener = Box<dyn Fn(ChangeEvent) + Send + Sync>;

/// Coordinates ledger state, persistence, and change notification.
///
/// Mutations run against the in-memory [`Ledger`] first; on success the
/// touched slot is written back to the backend, then listeners fire. A
/// failed save surfaces as an error but the in-memory change stands.
pub struct Tracker {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker")
            .field("ledger", &self.ledger)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Tracker {
    /// Loads the three slots from the backend, seeding defaults for any
    /// that were never written: the standard category set, an empty
    /// transaction list, and USD.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let categories: Vec<Category> = match storage.load(Slot::Categories)? {
            Some(value) => serde_json::from_value(value)?,
            None => Category::default_set(),
        };
        let transactions: Vec<Transaction> = match storage.load(Slot::Transactions)? {
            Some(value) => serde_json::from_value(value)?,
            None => Vec::new(),
        };
        let currency = match storage.load(Slot::Currency)? {
            Some(value) => {
                let code: String = serde_json::from_value(value)?;
                CurrencyCode::validated(&code)?
            }
            None => CurrencyCode::default(),
        };

        for line in load_warnings(&categories, &transactions) {
            warn!("{line}");
        }

        let ledger = Ledger::from_parts(categories, transactions, currency);
        info!(
            transactions = ledger.transaction_count(),
            categories = ledger.categories().len(),
            currency = %ledger.currency(),
            "tracker opened"
        );
        Ok(Self {
            ledger,
            storage,
            listeners: Vec::new(),
        })
    }

    /// Registers a listener invoked synchronously after each successful
    /// mutation has been persisted.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Read access to the underlying ledger for queries and aggregation.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn add_transaction(
        &mut self,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        category_id: CategoryId,
        notes: impl Into<String>,
    ) -> Result<Transaction> {
        let transaction = self
            .ledger
            .add_transaction(kind, amount, date, category_id, notes)?;
        self.persist(Slot::Transactions)?;
        self.notify(ChangeEvent::Transactions);
        Ok(transaction)
    }

    /// Removes a transaction by id. Unknown ids are a no-op; the slot is
    /// rewritten either way, but listeners only hear about actual removals.
    pub fn remove_transaction(&mut self, id: TransactionId) -> Result<Option<Transaction>> {
        let removed = self.ledger.remove_transaction(id);
        self.persist(Slot::Transactions)?;
        if removed.is_some() {
            self.notify(ChangeEvent::Transactions);
        }
        Ok(removed)
    }

    pub fn add_category(&mut self, name: &str, kind: EntryKind) -> Result<Category> {
        let category = self.ledger.add_category(name, kind)?;
        self.persist(Slot::Categories)?;
        self.notify(ChangeEvent::Categories);
        Ok(category)
    }

    /// Removes a category by id unless a transaction still references it.
    pub fn remove_category(&mut self, id: CategoryId) -> Result<Option<Category>> {
        let removed = self.ledger.remove_category(id)?;
        self.persist(Slot::Categories)?;
        if removed.is_some() {
            self.notify(ChangeEvent::Categories);
        }
        Ok(removed)
    }

    pub fn set_currency(&mut self, code: &str) -> Result<CurrencyCode> {
        let currency = self.ledger.set_currency(code)?;
        self.persist(Slot::Currency)?;
        self.notify(ChangeEvent::Currency);
        Ok(currency)
    }

    /// Resets the ledger to its seeded state, keeping the currency, and
    /// rewrites all three slots.
    pub fn clear_all(&mut self) -> Result<()> {
        self.ledger.clear_all();
        for slot in Slot::ALL {
            self.persist(slot)?;
        }
        self.notify(ChangeEvent::Reset);
        Ok(())
    }

    /// Writes the CSV export of every transaction to `writer`.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<()> {
        export::write_csv(
            self.ledger.transactions(),
            self.ledger.categories(),
            self.ledger.currency(),
            writer,
        )
    }

    fn persist(&self, slot: Slot) -> Result<()> {
        let value = self.slot_value(slot)?;
        self.storage.save(slot, &value)
    }

    fn slot_value(&self, slot: Slot) -> Result<Value> {
        let value = match slot {
            Slot::Transactions => serde_json::to_value(self.ledger.transactions())?,
            Slot::Categories => serde_json::to_value(self.ledger.categories())?,
            Slot::Currency => serde_json::to_value(self.ledger.currency())?,
        };
        Ok(value)
    }

    fn notify(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

fn load_warnings(categories: &[Category], transactions: &[Transaction]) -> Vec<String> {
    let category_ids: HashSet<CategoryId> = categories.iter().map(|category| category.id).collect();
    transactions
        .iter()
        .filter(|txn| !category_ids.contains(&txn.category_id))
        .map(|txn| {
            format!(
                "transaction {} references missing category {}",
                txn.id, txn.category_id
            )
        })
        .collect()
}
