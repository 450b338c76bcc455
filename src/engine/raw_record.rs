use crate::sink::Rejection;
use crate::validation::ValidationError;
use serde::Deserialize;

/// One data row exactly as it appears in the input, before any validation.
///
/// Rows are read by position, so the header names do not matter. Missing trailing
/// fields become empty strings and extra fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    /// One-based line in the source, counting the header as line 1.
    #[serde(skip)]
    pub line: u64,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: String
}

impl RawRecord {
    #[cfg(test)]
    pub fn new(line: u64, id: &str, category: &str, amount: &str) -> Self {
        Self {
            line,
            id: id.to_string(),
            category: category.to_string(),
            amount: amount.to_string()
        }
    }

    pub fn into_rejection(self, error: ValidationError) -> Rejection {
        Rejection {
            line: self.line,
            id: self.id,
            category: self.category,
            amount: self.amount,
            error
        }
    }
}
