//! Simulation observer trait for trace output and data collection.

use qs_event::Event;
use qs_model::Statistics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step] as events are processed.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: trace printer
///
/// ```rust
/// use qs_event::Event;
/// use qs_model::Statistics;
/// use qs_sim::SimObserver;
///
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event) {
///         println!("{event}");
///     }
///
///     fn on_sim_end(&mut self, stats: &Statistics) {
///         println!("{stats}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called for every visible event, in trace order, after its effects
    /// have been applied.
    fn on_event(&mut self, _event: &Event) {}

    /// Called for `Rest` and `Back` events, which never enter the trace.
    fn on_internal_event(&mut self, _event: &Event) {}

    /// Called once when the event queue has drained.
    fn on_sim_end(&mut self, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// only want the log and statistics kept on the `Sim`.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
