mod cli;
mod engine;
mod models;
mod report;
mod sink;
mod types;
mod validation;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Args;
use crate::engine::Engine;
use crate::models::CategoryLabels;
use crate::report::{ReportPrinter, Summary};
use crate::sink::LogFileSink;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.level_filter());

    let labels = args.category_labels();
    let mut sink = match args.error_log_path() {
        Some(path) => LogFileSink::with_file(path),
        None => LogFileSink::new()
    };

    let engine = Engine::new(labels.clone());
    let transactions = engine.run(&args.input, &mut sink)?;
    sink.flush()?;

    let summary = Summary::from_transactions(&transactions)?;

    info!("Summarised {} accepted transactions", summary.accepted());

    write_report_to_stdout(&summary, labels)?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report owns stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_report_to_stdout(summary: &Summary, labels: CategoryLabels) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    ReportPrinter::new(labels).render(summary, &mut output)?;

    output.flush()?;

    Ok(())
}
