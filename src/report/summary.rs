use crate::models::{Category, Transaction};
use crate::report::SummaryError;
use crate::types::Monetary;
use std::ops::Index;

/// Number of accepted transactions per category. Both categories are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    credit: usize,
    debit: usize
}

impl CategoryCounts {
    pub fn increment(&mut self, category: Category) {
        match category {
            Category::Credit => self.credit += 1,
            Category::Debit => self.debit += 1
        }
    }

    pub fn total(&self) -> usize {
        self.credit + self.debit
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(move |category| (category, self[category]))
    }
}

impl Index<Category> for CategoryCounts {
    type Output = usize;

    fn index(&self, category: Category) -> &usize {
        match category {
            Category::Credit => &self.credit,
            Category::Debit => &self.debit
        }
    }
}

/// Aggregate view over every accepted transaction of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Credits minus debits, starting from zero.
    pub balance: Monetary,
    /// The transaction with the greatest amount; the earliest one wins a tie.
    /// `None` when nothing was accepted.
    pub largest: Option<Transaction>,
    pub counts: CategoryCounts
}

impl Summary {
    /// Reduces the accepted transactions, in input order, into a summary.
    ///
    /// # Errors
    /// Returns `SummaryError::BalanceOverflow` if the running balance leaves the range
    /// `Monetary` can carry. No transaction is ever dropped from the balance.
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self, SummaryError> {
        Ok(Self {
            balance: Self::balance(transactions)?,
            largest: Self::largest(transactions).cloned(),
            counts: Self::counts(transactions)
        })
    }

    pub fn accepted(&self) -> usize {
        self.counts.total()
    }

    fn balance(transactions: &[Transaction]) -> Result<Monetary, SummaryError> {
        transactions.iter().try_fold(Monetary::zero(), |balance, transaction| {
            let next = match transaction.category() {
                Category::Credit => balance.checked_add(transaction.amount()),
                Category::Debit => balance.checked_sub(transaction.amount())
            };

            next.ok_or(SummaryError::BalanceOverflow { transaction_id: transaction.id() })
        })
    }

    fn largest(transactions: &[Transaction]) -> Option<&Transaction> {
        //NOTE: max_by_key keeps the last of equal elements, so fold manually to keep the first
        transactions.iter().fold(None, |largest: Option<&Transaction>, transaction| match largest {
            Some(current) if current.amount() >= transaction.amount() => Some(current),
            _ => Some(transaction)
        })
    }

    fn counts(transactions: &[Transaction]) -> CategoryCounts {
        let mut counts = CategoryCounts::default();

        for transaction in transactions {
            counts.increment(transaction.category());
        }

        counts
    }
}
