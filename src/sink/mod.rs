mod log_file_sink;
#[cfg(test)]
mod memory_sink;
mod rejection;

use std::io;

pub use log_file_sink::LogFileSink;
#[cfg(test)]
pub use memory_sink::MemorySink;
pub use rejection::Rejection;

/// Destination for rejected records. A sink receives every rejection of a run exactly
/// once, in input order.
pub trait ErrorSink {
    fn record(&mut self, rejection: &Rejection) -> io::Result<()>;
}
