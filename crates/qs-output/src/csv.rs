//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use qs_event::Event;
use qs_model::Statistics;

use crate::row::{EventRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the visible trace and the final statistics to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time", "customer", "greedy", "kind", "server"])?;

        let mut summary = Writer::from_path(dir.join("summary.csv"))?;
        summary.write_record(["average_wait", "served", "left"])?;

        Ok(Self {
            events,
            summary,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        let Some(row) = EventRow::from_event(event) else {
            return Ok(());
        };
        self.events.write_record(&[
            format!("{:.3}", row.time),
            row.customer.to_string(),
            (row.greedy as u8).to_string(),
            row.kind.label().to_owned(),
            row.server.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, stats: &Statistics) -> OutputResult<()> {
        let row = SummaryRow::from(stats);
        self.summary.write_record(&[
            format!("{:.3}", row.average_wait),
            row.served.to_string(),
            row.left.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
