//! Named-slot persistence for ledger data.
//!
//! The tracker keeps its state in three slots, each holding one JSON value.
//! Backends only need to answer `load` and `save` per slot; everything else
//! (shapes, seeding, counters) is the tracker's business.

pub mod json_store;
pub mod memory;

use serde_json::Value;

use crate::errors::Result;

/// The three persisted slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Transactions,
    Categories,
    Currency,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Transactions, Slot::Categories, Slot::Currency];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Transactions => "transactions",
            Slot::Categories => "categories",
            Slot::Currency => "currency",
        }
    }
}

/// Abstraction over persistence backends holding one JSON value per slot.
pub trait StorageBackend: Send + Sync {
    /// Reads a slot. `Ok(None)` means it was never written.
    fn load(&self, slot: Slot) -> Result<Option<Value>>;

    /// Overwrites a slot. A later `load` on the same backend observes the
    /// new value.
    fn save(&self, slot: Slot, value: &Value) -> Result<()>;
}

/// Shared handles delegate, so one backend can serve several owners.
impl<T: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<T> {
    fn load(&self, slot: Slot) -> Result<Option<Value>> {
        (**self).load(slot)
    }

    fn save(&self, slot: Slot, value: &Value) -> Result<()> {
        (**self).save(slot, value)
    }
}

pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
