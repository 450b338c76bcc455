use crate::types::TransactionId;
use thiserror::Error;

/// Why a raw record was rejected. Each variant is one rule of the pipeline, and the
/// `Display` text is the reason written to the error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid id: {raw_id}")]
    InvalidId {
        raw_id: String
    },
    #[error("duplicate id: {id}")]
    DuplicateId {
        id: TransactionId
    },
    #[error("invalid category: {raw_category}")]
    InvalidCategory {
        raw_category: String
    },
    #[error("invalid amount (format): {raw_amount}")]
    InvalidAmountFormat {
        raw_amount: String
    },
    #[error("invalid amount (value): {raw_amount}")]
    InvalidAmountValue {
        raw_amount: String
    }
}

impl ValidationError {
    pub fn invalid_id(raw_id: &str) -> Self {
        Self::InvalidId { raw_id: raw_id.to_string() }
    }

    pub fn duplicate_id(id: TransactionId) -> Self {
        Self::DuplicateId { id }
    }

    pub fn invalid_category(raw_category: &str) -> Self {
        Self::InvalidCategory { raw_category: raw_category.to_string() }
    }

    pub fn invalid_amount_format(raw_amount: &str) -> Self {
        Self::InvalidAmountFormat { raw_amount: raw_amount.to_string() }
    }

    pub fn invalid_amount_value(raw_amount: &str) -> Self {
        Self::InvalidAmountValue { raw_amount: raw_amount.to_string() }
    }
}
