//! Event variants and their ordering priority.

use std::fmt;

use qs_core::SimTime;
use qs_model::{Customer, ServerRef};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// The seven event kinds, declared in tie-break order.
///
/// When two events share a timestamp the one with the lower priority is
/// processed first, so a server is released (`Done`) before a simultaneous
/// arrival looks for a free server.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Done,
    Served,
    Rest,
    Back,
    Arrival,
    Wait,
    Leave,
}

impl EventKind {
    /// Tie-break rank for simultaneous events: `Done` = 0 … `Leave` = 6.
    #[inline]
    pub fn priority(self) -> u8 {
        self as u8
    }

    /// Short lowercase name used in CSV output and log lines.
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Done    => "done",
            EventKind::Served  => "served",
            EventKind::Rest    => "rest",
            EventKind::Back    => "back",
            EventKind::Arrival => "arrival",
            EventKind::Wait    => "wait",
            EventKind::Leave   => "leave",
        }
    }

    /// `Rest` and `Back` are bookkeeping and never appear in the trace.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, EventKind::Rest | EventKind::Back)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Event ─────────────────────────────────────────────────────────────────────

/// One scheduled state transition.
///
/// Each variant carries only what its transition needs.  Events are produced
/// by [`decide`](crate::decide) (or by the initial arrival schedule) and
/// consumed exactly once by the simulation loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Event {
    /// `server` finished serving `customer`.
    Done    { time: SimTime, customer: Customer, server: ServerRef },
    /// `server` starts serving `customer`.
    Served  { time: SimTime, customer: Customer, server: ServerRef },
    /// A human server goes on a break.
    Rest    { time: SimTime, server: ServerRef },
    /// A human server returns from its break.
    Back    { time: SimTime, server: ServerRef },
    /// `customer` enters the facility.
    Arrival { time: SimTime, customer: Customer },
    /// `customer` joins the line `server` draws from.
    Wait    { time: SimTime, customer: Customer, server: ServerRef },
    /// `customer` found nowhere to go.
    Leave   { time: SimTime, customer: Customer },
}

impl Event {
    /// The initial event of every customer.
    pub fn arrival(customer: Customer) -> Self {
        Event::Arrival { time: customer.arrival, customer }
    }

    pub fn time(&self) -> SimTime {
        match *self {
            Event::Done { time, .. }
            | Event::Served { time, .. }
            | Event::Rest { time, .. }
            | Event::Back { time, .. }
            | Event::Arrival { time, .. }
            | Event::Wait { time, .. }
            | Event::Leave { time, .. } => time,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Done { .. }    => EventKind::Done,
            Event::Served { .. }  => EventKind::Served,
            Event::Rest { .. }    => EventKind::Rest,
            Event::Back { .. }    => EventKind::Back,
            Event::Arrival { .. } => EventKind::Arrival,
            Event::Wait { .. }    => EventKind::Wait,
            Event::Leave { .. }   => EventKind::Leave,
        }
    }

    /// The customer concerned, absent for `Rest` and `Back`.
    pub fn customer(&self) -> Option<&Customer> {
        match self {
            Event::Done { customer, .. }
            | Event::Served { customer, .. }
            | Event::Arrival { customer, .. }
            | Event::Wait { customer, .. }
            | Event::Leave { customer, .. } => Some(customer),
            Event::Rest { .. } | Event::Back { .. } => None,
        }
    }

    /// The server concerned, absent for `Arrival` and `Leave`.
    pub fn server(&self) -> Option<ServerRef> {
        match *self {
            Event::Done { server, .. }
            | Event::Served { server, .. }
            | Event::Rest { server, .. }
            | Event::Back { server, .. }
            | Event::Wait { server, .. } => Some(server),
            Event::Arrival { .. } | Event::Leave { .. } => None,
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.kind().is_visible()
    }
}

/// One trace line: `<time> <customer> <verb> [by <server>]`.
///
/// `Rest` and `Back` render as `<time> <server> rests` / `<time> <server>
/// back`; they are only shown in debug output.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Done { time, customer, server } => {
                write!(f, "{time} {customer} done serving by {server}")
            }
            Event::Served { time, customer, server } => {
                write!(f, "{time} {customer} served by {server}")
            }
            Event::Rest { time, server }         => write!(f, "{time} {server} rests"),
            Event::Back { time, server }         => write!(f, "{time} {server} back"),
            Event::Arrival { time, customer }    => write!(f, "{time} {customer} arrives"),
            Event::Wait { time, customer, server } => {
                write!(f, "{time} {customer} waits to be served by {server}")
            }
            Event::Leave { time, customer }      => write!(f, "{time} {customer} leaves"),
        }
    }
}
