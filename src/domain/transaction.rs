//! Domain type for recorded income and expense entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{CategoryId, EntryKind, TransactionId};

/// A single dated movement of money, linked to a category by id.
///
/// Serialized field names match the persisted slot layout, so `category_id`
/// travels as `categoryId` and `kind` as `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: CategoryId,
    #[serde(default)]
    pub notes: String,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        kind: EntryKind,
        amount: f64,
        date: NaiveDate,
        category_id: CategoryId,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            date,
            category_id,
            notes: notes.into(),
        }
    }
}
