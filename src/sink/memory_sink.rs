use crate::sink::{ErrorSink, Rejection};
use std::io;

#[derive(Debug, Default)]
pub struct MemorySink {
    pub rejections: Vec<Rejection>
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorSink for MemorySink {
    fn record(&mut self, rejection: &Rejection) -> io::Result<()> {
        self.rejections.push(rejection.clone());
        Ok(())
    }
}
