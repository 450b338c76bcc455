use crate::models::CategoryLabels;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Validate a transaction file and print a summary report
#[derive(Parser, Debug)]
#[command(name = "transaction-report")]
#[command(about = "Validate a transaction file and print a summary report", long_about = None)]
pub struct Args {
    /// CSV file with an id,category,amount header row
    #[arg(value_name = "INPUT", default_value = "data/data.csv")]
    pub input: PathBuf,

    /// File that rejected rows are appended to
    #[arg(long = "error-log", value_name = "PATH", env = "TRANSACTION_REPORT_ERROR_LOG", default_value = "errors.log")]
    pub error_log: PathBuf,

    /// Only report rejected rows as warnings, without writing the error log
    #[arg(long = "no-error-log")]
    pub no_error_log: bool,

    /// Category labels used by the input file and the report
    #[arg(long = "labels", value_name = "LABELS", env = "TRANSACTION_REPORT_LABELS", default_value = "english")]
    pub labels: LabelSet,

    /// One of error, warn, info, debug, trace
    #[arg(long = "log-level", value_name = "LEVEL", env = "TRANSACTION_REPORT_LOG", default_value = "warn")]
    pub log_level: String
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LabelSet {
    English,
    Spanish
}

impl Args {
    pub fn category_labels(&self) -> CategoryLabels {
        match self.labels {
            LabelSet::English => CategoryLabels::english(),
            LabelSet::Spanish => CategoryLabels::spanish()
        }
    }

    pub fn error_log_path(&self) -> Option<&Path> {
        if self.no_error_log {
            None
        } else {
            Some(&self.error_log)
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        parse_log_level(&self.log_level)
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'warn'", level);
            LevelFilter::WARN
        }
    }
}
