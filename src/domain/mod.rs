pub mod category;
pub mod common;
pub mod transaction;

pub use category::Category;
pub use common::{CategoryId, EntryKind, TransactionId};
pub use transaction::Transaction;
