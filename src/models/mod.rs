mod transaction;

pub use transaction::Transaction;

/// The two recognised kinds of transaction. The category decides the sign an amount
/// carries in the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Credit,
    Debit
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Credit, Category::Debit];
}

/// The exact text used for each category in the input file and in the report.
///
/// Matching is case-sensitive and performs no normalisation, so `credit` does not
/// match `Credit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabels {
    pub credit: String,
    pub debit: String
}

impl CategoryLabels {
    pub fn english() -> Self {
        Self {
            credit: "Credit".to_string(),
            debit: "Debit".to_string()
        }
    }

    pub fn spanish() -> Self {
        Self {
            credit: "Crédito".to_string(),
            debit: "Débito".to_string()
        }
    }

    pub fn parse(&self, raw: &str) -> Option<Category> {
        if raw == self.credit {
            Some(Category::Credit)
        } else if raw == self.debit {
            Some(Category::Debit)
        } else {
            None
        }
    }

    pub fn label(&self, category: Category) -> &str {
        match category {
            Category::Credit => &self.credit,
            Category::Debit => &self.debit
        }
    }
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self::english()
    }
}
