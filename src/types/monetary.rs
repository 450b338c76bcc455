use crate::types::errors::MonetaryError;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: usize = 2;
/// Largest amount a single record may carry: 999,999,999,999,999.99.
const MAX_AMOUNT_CENTS: i64 = 99_999_999_999_999_999;
/// Largest magnitude a running balance may reach, so it always prints with two places.
const MAX_BALANCE_CENTS: i64 = i64::MAX;

/// An exact two-decimal monetary quantity.
///
/// Parsing only accepts plain unsigned amounts (`100`, `100.5`, `100.50`), so every
/// parsed value is non-negative and at most `999999999999999.99`. Balances derived from
/// parsed values may go negative, and arithmetic fails instead of leaving the range in
/// which every value still renders with two places.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn zero() -> Self {
        Monetary(Decimal::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_add(rhs.0).and_then(Self::bounded)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Option<Monetary> {
        self.0.checked_sub(rhs.0).and_then(Self::bounded)
    }

    fn bounded(value: Decimal) -> Option<Monetary> {
        if value.abs() > Decimal::new(MAX_BALANCE_CENTS, DECIMAL_PLACES as u32) {
            return None
        }

        Some(Monetary(value))
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut value = self.0.round_dp(DECIMAL_PLACES as u32);
        value.rescale(DECIMAL_PLACES as u32);
        write!(formatter, "{}", value)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let (integer, fraction) = match value.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (value, None)
        };

        if integer.is_empty() || !integer.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(MonetaryError::InvalidFormat(format!("Value has an invalid integer part: {value:?}")));
        }

        if let Some(fraction) = fraction {
            if fraction.is_empty() || fraction.len() > DECIMAL_PLACES {
                return Err(MonetaryError::InvalidFormat(format!("Value must have one or two decimal places: {value:?}")));
            }

            if !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(MonetaryError::InvalidFormat(format!("Value has an invalid fraction part: {value:?}")));
            }
        }

        //NOTE: The grammar is already satisfied here, so any failure from here on is a value too large to carry
        let amount = Decimal::from_str_exact(value)
            .map_err(|_| MonetaryError::Overflow)?;

        if amount > Decimal::new(MAX_AMOUNT_CENTS, DECIMAL_PLACES as u32) {
            return Err(MonetaryError::Overflow)
        }

        Ok(Monetary(amount))
    }
}
