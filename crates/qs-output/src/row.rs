//! Plain data row types written by the CSV backend.

use qs_event::{Event, EventKind};
use qs_model::{ServerRef, Statistics};

/// One visible trace event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRow {
    pub time:     f64,
    pub customer: u32,
    pub greedy:   bool,
    pub kind:     EventKind,
    /// Absent for `Arrival` and `Leave`.
    pub server:   Option<ServerRef>,
}

impl EventRow {
    /// `None` for `Rest` and `Back`, which carry no customer and never
    /// appear in the trace.
    pub fn from_event(event: &Event) -> Option<Self> {
        let customer = event.customer()?;
        Some(Self {
            time:     event.time().as_f64(),
            customer: customer.id.0,
            greedy:   customer.greedy,
            kind:     event.kind(),
            server:   event.server(),
        })
    }
}

/// The final statistics of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub average_wait: f64,
    pub served:       u64,
    pub left:         u64,
}

impl From<&Statistics> for SummaryRow {
    fn from(stats: &Statistics) -> Self {
        Self {
            average_wait: stats.average_wait(),
            served:       stats.served,
            left:         stats.left,
        }
    }
}
