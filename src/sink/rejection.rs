use crate::validation::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};

/// A record that failed validation, with everything needed to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// One-based line in the source, counting the header as line 1.
    pub line: u64,
    pub id: String,
    pub category: String,
    pub amount: String,
    pub error: ValidationError
}

impl Display for Rejection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Line {} - Data id: {}, category: {}, amount: {} - Error: {} (Skipped)",
            self.line, self.id, self.category, self.amount, self.error
        )
    }
}
