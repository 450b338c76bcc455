use crate::types::TransactionId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Balance overflowed while applying transaction [{transaction_id}]")]
    BalanceOverflow {
        transaction_id: TransactionId
    }
}
