use crate::sink::{ErrorSink, Rejection};
use chrono::{SecondsFormat, Utc};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Reports every rejection as a warning and, when a path is configured, appends it
/// to that file with a UTC timestamp.
///
/// The file is opened on the first rejection, so a clean run leaves no log behind.
pub struct LogFileSink {
    path: Option<PathBuf>,
    file: Option<BufWriter<File>>
}

impl LogFileSink {
    /// A sink that only emits warnings.
    pub fn new() -> Self {
        Self {
            path: None,
            file: None
        }
    }

    /// A sink that also appends to `path`, creating the file if needed.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            file: None
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(())
        }
    }

    fn writer(&mut self) -> io::Result<Option<&mut BufWriter<File>>> {
        if self.file.is_none() {
            if let Some(path) = &self.path {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?;

                self.file = Some(BufWriter::new(file));
            }
        }

        Ok(self.file.as_mut())
    }
}

impl ErrorSink for LogFileSink {
    fn record(&mut self, rejection: &Rejection) -> io::Result<()> {
        warn!("{rejection}");

        if let Some(file) = self.writer()? {
            let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
            writeln!(file, "[{timestamp}] {rejection}")?;
        }

        Ok(())
    }
}
