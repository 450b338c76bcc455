mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::Monetary;

pub type TransactionId = u64;
