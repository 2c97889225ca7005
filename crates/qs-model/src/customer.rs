//! Customers.

use std::fmt;

use qs_core::{CustomerId, SimTime};

/// A customer: who, when they arrived, and which routing policy they use.
///
/// Immutable after creation and cheap to copy; queues and servers hold
/// copies rather than references.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:      CustomerId,
    pub arrival: SimTime,
    /// Greedy customers join the shortest queue instead of the first free one.
    pub greedy:  bool,
}

impl Customer {
    #[inline]
    pub fn new(id: CustomerId, arrival: SimTime, greedy: bool) -> Self {
        Self { id, arrival, greedy }
    }

    /// Time spent waiting if service starts at `start`.
    #[inline]
    pub fn wait_until(&self, start: SimTime) -> f64 {
        start - self.arrival
    }
}

/// Trace token: the id, suffixed with `(greedy)` for greedy customers.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.greedy {
            write!(f, "{}(greedy)", self.id)
        } else {
            write!(f, "{}", self.id)
        }
    }
}
