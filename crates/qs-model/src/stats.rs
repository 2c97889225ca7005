//! Run statistics.

use std::fmt;

/// Aggregate outcome counters, owned by the simulation and updated as
/// `Served` and `Leave` events are processed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Customers whose service started.
    pub served:     u64,
    /// Customers who found no server and no queue space.
    pub left:       u64,
    /// Sum over served customers of (service start − arrival).
    pub total_wait: f64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_served(&mut self, wait: f64) {
        self.served += 1;
        self.total_wait += wait;
    }

    pub fn record_left(&mut self) {
        self.left += 1;
    }

    /// Mean wait over served customers; `0.0` when nobody was served.
    pub fn average_wait(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait / self.served as f64
        }
    }

    /// Customers resolved so far (served or left).
    pub fn resolved(&self) -> u64 {
        self.served + self.left
    }
}

/// The summary line: `[<average wait> <served> <left>]`.
impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3} {} {}]", self.average_wait(), self.served, self.left)
    }
}
