use crate::models::{Category, CategoryLabels, Transaction};
use crate::types::{Monetary, MonetaryError, TransactionId};
use crate::validation::ValidationError;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::trace;

/// Turns raw field triples into transactions for a single run.
///
/// The validator remembers every id it has accepted so later records cannot reuse
/// one. Build a new validator for every input; state is never shared between runs.
#[derive(Debug)]
pub struct Validator {
    labels: CategoryLabels,
    seen_ids: HashSet<TransactionId>
}

impl Validator {
    pub fn new(labels: CategoryLabels) -> Self {
        Self {
            labels,
            seen_ids: HashSet::new()
        }
    }

    /// Validates one record against the rules below, stopping at the first failure:
    ///
    /// 1. the id is a strictly positive integer
    /// 2. the id has not been accepted earlier in this run
    /// 3. the category is one of the two labels, matched exactly
    /// 4. the amount is digits with an optional one or two digit fraction
    /// 5. the amount is representable and not negative
    ///
    /// Only an accepted record changes the validator's state.
    ///
    /// # Errors
    /// Returns the `ValidationError` of the first rule that fails.
    pub fn validate(&mut self, raw_id: &str, raw_category: &str, raw_amount: &str) -> Result<Transaction, ValidationError> {
        let id = Self::parse_id(raw_id)?;

        if self.seen_ids.contains(&id) {
            return Err(ValidationError::duplicate_id(id))
        }

        let category = self.parse_category(raw_category)?;
        let amount = Self::parse_amount(raw_amount)?;

        self.seen_ids.insert(id);
        trace!("Transaction [{id}]:[{category:?}] accepted for [{amount}]");

        Ok(Transaction::new(id, category, amount))
    }

    /// Number of ids accepted so far in this run.
    pub fn seen(&self) -> usize {
        self.seen_ids.len()
    }

    fn parse_id(raw_id: &str) -> Result<TransactionId, ValidationError> {
        let parsed: i64 = raw_id.parse()
            .map_err(|_| ValidationError::invalid_id(raw_id))?;

        if parsed <= 0 {
            return Err(ValidationError::invalid_id(raw_id))
        }

        TransactionId::try_from(parsed)
            .map_err(|_| ValidationError::invalid_id(raw_id))
    }

    fn parse_category(&self, raw_category: &str) -> Result<Category, ValidationError> {
        self.labels.parse(raw_category)
            .ok_or_else(|| ValidationError::invalid_category(raw_category))
    }

    fn parse_amount(raw_amount: &str) -> Result<Monetary, ValidationError> {
        let amount = Monetary::from_str(raw_amount).map_err(|error| match error {
            MonetaryError::InvalidFormat(_) => ValidationError::invalid_amount_format(raw_amount),
            MonetaryError::Overflow => ValidationError::invalid_amount_value(raw_amount)
        })?;

        if amount.is_negative() {
            return Err(ValidationError::invalid_amount_value(raw_amount))
        }

        Ok(amount)
    }
}
