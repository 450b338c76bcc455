mod line_counter;
mod raw_record;
mod transaction_engine;

pub use raw_record::RawRecord;
pub use transaction_engine::Engine;
