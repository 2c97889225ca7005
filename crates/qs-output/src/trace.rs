//! Plain-text trace backend.
//!
//! One line per visible event, then the statistics line:
//!
//! ```text
//! 0.000 1 arrives
//! 0.000 1 served by server 1
//! 2.000 1 done serving by server 1
//! [0.000 1 0]
//! ```

use std::io::Write;

use qs_event::Event;
use qs_model::Statistics;

use crate::writer::OutputWriter;
use crate::OutputResult;

/// Writes the text trace to any [`Write`] sink (stdout, a file, a buffer).
pub struct TraceWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the sink (e.g. to inspect a buffer after the sim).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TraceWriter<W> {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        if event.is_visible() {
            writeln!(self.out, "{event}")?;
        }
        Ok(())
    }

    fn write_summary(&mut self, stats: &Statistics) -> OutputResult<()> {
        writeln!(self.out, "{stats}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
