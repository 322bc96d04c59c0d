use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// Identifier assigned to a category by the ledger.
pub type CategoryId = u32;

/// Identifier assigned to a transaction by the ledger.
pub type TransactionId = u32;

/// Whether a record represents money coming in or going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

impl FromStr for EntryKind {
    type Err = TrackerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(TrackerError::Validation(format!(
                "unknown entry type `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_kind_parses_case_insensitively() {
        assert_eq!("Income".parse::<EntryKind>().expect("parse"), EntryKind::Income);
        assert_eq!(" EXPENSE ".parse::<EntryKind>().expect("parse"), EntryKind::Expense);
    }

    #[test]
    fn entry_kind_rejects_unknown_labels() {
        let err = "transfer".parse::<EntryKind>().expect_err("must fail");
        assert!(matches!(err, TrackerError::Validation(_)));
    }

    #[test]
    fn entry_kind_serializes_lowercase() {
        let json = serde_json::to_string(&EntryKind::Income).expect("serialize");
        assert_eq!(json, "\"income\"");
    }
}
