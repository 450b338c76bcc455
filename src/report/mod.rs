mod errors;
mod printer;
mod summary;

pub use errors::SummaryError;
pub use printer::ReportPrinter;
pub use summary::{CategoryCounts, Summary};
