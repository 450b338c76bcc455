use crate::engine::line_counter::LineCounter;
use crate::engine::RawRecord;
use crate::models::{CategoryLabels, Transaction};
use crate::sink::ErrorSink;
use crate::validation::Validator;
use anyhow::Context;
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::iter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Drives one validation run: raw rows in, accepted transactions out, every rejected
/// row handed to the error sink.
pub struct Engine {
    labels: CategoryLabels
}

impl Engine {
    pub fn new(labels: CategoryLabels) -> Self {
        Self { labels }
    }

    /// Validates the CSV file at `path`.
    ///
    /// # Errors
    /// Fails when the file cannot be opened or read, or when the sink cannot record a
    /// rejection. Invalid rows are not errors; they go to the sink.
    pub fn run<P: AsRef<Path>, S: ErrorSink>(&self, path: P, sink: &mut S) -> anyhow::Result<Vec<Transaction>> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Error opening CSV at path: {}", path.display()))?;

        self.read(BufReader::new(file), sink)
            .with_context(|| format!("Error reading CSV at path: {}", path.display()))
    }

    /// Validates CSV content from any reader. The first row is the header and is skipped.
    ///
    /// Fields are decoded lossily, so bytes that are not UTF-8 reach the validator as
    /// replacement characters and fail their rule like any other bad value.
    pub fn read<R: Read, S: ErrorSink>(&self, mut reader: R, sink: &mut S) -> anyhow::Result<Vec<Transaction>> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input).context("CSV input could not be read")?;

        //NOTE: No trimming, surrounding whitespace is part of the value and must fail validation
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(input.as_slice());

        reader.byte_headers().context("CSV header could not be read")?;

        let mut lines = LineCounter::new(&input);
        let mut row = ByteRecord::new();
        let mut failure = None;

        let records = iter::from_fn(|| {
            let line = lines.line_at(reader.position().byte());

            let decoded = match reader.read_byte_record(&mut row) {
                Ok(true) => Self::decode(&row, line),
                Ok(false) => return None,
                Err(error) => Err(error)
            };

            decoded.map_err(|error| failure = Some(error)).ok()
        });

        let transactions = self.process(records, sink)?;

        if let Some(error) = failure {
            return Err(anyhow::Error::new(error).context("CSV row could not be read"))
        }

        Ok(transactions)
    }

    /// Validates already-split rows in order with a fresh validator.
    pub fn process<I, S>(&self, records: I, sink: &mut S) -> io::Result<Vec<Transaction>>
    where
        I: IntoIterator<Item = RawRecord>,
        S: ErrorSink
    {
        let timer = Instant::now();
        let mut validator = Validator::new(self.labels.clone());
        let mut transactions = Vec::new();
        let mut rejected = 0usize;

        for record in records {
            match validator.validate(&record.id, &record.category, &record.amount) {
                Ok(transaction) => {
                    debug!("Line [{}] accepted as transaction [{}]", record.line, transaction.id());
                    transactions.push(transaction);
                },
                Err(error) => {
                    rejected += 1;
                    sink.record(&record.into_rejection(error))?;
                }
            }
        }

        info!("Validated {} records ({} accepted, {} rejected) in: {:?}", validator.seen() + rejected, validator.seen(), rejected, timer.elapsed());

        Ok(transactions)
    }

    fn decode(row: &ByteRecord, line: u64) -> csv::Result<RawRecord> {
        let decoded: StringRecord = row.iter().map(String::from_utf8_lossy).collect();

        Ok(RawRecord {
            line,
            ..decoded.deserialize::<RawRecord>(None)?
        })
    }
}
