//! Domain type representing transaction categories.

use serde::{Deserialize, Serialize};

use crate::domain::common::{CategoryId, EntryKind};

/// Groups transactions for reporting. Income and expense categories live in
/// separate namespaces, so the same name may appear once under each kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// The seed set every fresh ledger starts with, ids 1 through 9.
    pub fn default_set() -> Vec<Category> {
        vec![
            Category::new(1, "Salary", EntryKind::Income),
            Category::new(2, "Freelance", EntryKind::Income),
            Category::new(3, "Investment", EntryKind::Income),
            Category::new(4, "Gift", EntryKind::Income),
            Category::new(5, "Food", EntryKind::Expense),
            Category::new(6, "Transportation", EntryKind::Expense),
            Category::new(7, "Entertainment", EntryKind::Expense),
            Category::new(8, "Utilities", EntryKind::Expense),
            Category::new(9, "Healthcare", EntryKind::Expense),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_nine_entries_with_sequential_ids() {
        let seed = Category::default_set();
        assert_eq!(seed.len(), 9);
        for (index, category) in seed.iter().enumerate() {
            assert_eq!(category.id, index as CategoryId + 1);
        }
        assert_eq!(
            seed.iter()
                .filter(|c| c.kind == EntryKind::Income)
                .count(),
            4
        );
    }

    #[test]
    fn serializes_kind_under_the_type_key() {
        let category = Category::new(5, "Food", EntryKind::Expense);
        let value = serde_json::to_value(&category).expect("serialize");
        assert_eq!(value["type"], "expense");
        assert_eq!(value["name"], "Food");
    }
}
