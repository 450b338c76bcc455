use crate::models::Category;
use crate::types::{Monetary, TransactionId};

/// A record that passed validation.
///
/// Only the validator builds these, and nothing mutates one afterwards, so the
/// fields are private and read through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    category: Category,
    amount: Monetary
}

impl Transaction {
    pub(crate) fn new(id: TransactionId, category: Category, amount: Monetary) -> Self {
        Self {
            id,
            category,
            amount
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Never negative.
    pub fn amount(&self) -> Monetary {
        self.amount
    }
}
