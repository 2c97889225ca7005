//! The `OutputWriter` trait implemented by all backend writers.

use qs_event::Event;
use qs_model::Statistics;

use crate::OutputResult;

/// Trait implemented by the trace and CSV writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one visible event.
    fn write_event(&mut self, event: &Event) -> OutputResult<()>;

    /// Write the final statistics.
    fn write_summary(&mut self, stats: &Statistics) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Both writers receive every call, first `A` then `B`.  The first error
/// stops the call.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        self.0.write_event(event)?;
        self.1.write_event(event)
    }

    fn write_summary(&mut self, stats: &Statistics) -> OutputResult<()> {
        self.0.write_summary(stats)?;
        self.1.write_summary(stats)
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// An absent writer ignores every call.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_event(&mut self, event: &Event) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_event(event))
    }

    fn write_summary(&mut self, stats: &Statistics) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.write_summary(stats))
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.as_mut().map_or(Ok(()), |w| w.finish())
    }
}
