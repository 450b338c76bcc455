use crate::models::CategoryLabels;
use crate::report::Summary;
use std::io::{self, Write};

const RULE: &str = "---------------------------------------------";

/// Renders a `Summary` as the plain-text report shown to the user.
pub struct ReportPrinter {
    labels: CategoryLabels
}

impl ReportPrinter {
    pub fn new(labels: CategoryLabels) -> Self {
        Self { labels }
    }

    pub fn render<W: Write>(&self, summary: &Summary, output: &mut W) -> io::Result<()> {
        writeln!(output, "{RULE}")?;
        writeln!(output, "Transaction Report")?;
        writeln!(output, "{RULE}")?;
        writeln!(output, "Final Balance: {}", summary.balance)?;

        match &summary.largest {
            Some(largest) => writeln!(output, "Largest Transaction: ID {} - {}", largest.id(), largest.amount())?,
            None => writeln!(output, "Largest Transaction: none")?
        }

        let counts: Vec<String> = summary.counts.iter()
            .map(|(category, count)| format!("{}: {}", self.labels.label(category), count))
            .collect();

        writeln!(output, "Transaction Count: {}", counts.join(" "))?;

        Ok(())
    }
}
