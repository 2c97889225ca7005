//! Fluent builder for [`SystemState`].
//!
//! # Usage
//!
//! ```rust
//! use qs_model::SystemStateBuilder;
//!
//! let state = SystemStateBuilder::new()
//!     .humans(2, /*capacity=*/ 3, /*rest_threshold=*/ 0.0)
//!     .self_checkouts(2, /*shared_capacity=*/ 5)
//!     .build();
//!
//! assert_eq!(state.humans().len(), 2);
//! assert_eq!(state.self_checkouts()[0].id.0, 3);
//! assert_eq!(state.shared_queue().capacity(), 5);
//! ```

use qs_core::{ServerId, SimConfig};

use crate::{CustomerQueue, HumanServer, SelfCheckout, SystemState};

/// Builds a [`SystemState`], numbering humans first and counters after them.
#[derive(Clone, Debug, Default)]
pub struct SystemStateBuilder {
    human_count:     usize,
    human_capacity:  usize,
    rest_threshold:  f64,
    counter_count:   usize,
    shared_capacity: usize,
}

impl SystemStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take server counts, capacities and rest threshold from `config`.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new()
            .humans(config.human_servers, config.queue_capacity, config.rest_probability)
            .self_checkouts(config.self_checkouts, config.shared_capacity())
    }

    /// `count` human servers, each with a private queue of `capacity`.
    pub fn humans(mut self, count: usize, capacity: usize, rest_threshold: f64) -> Self {
        self.human_count = count;
        self.human_capacity = capacity;
        self.rest_threshold = rest_threshold;
        self
    }

    /// `count` self-checkout counters sharing one queue of `capacity`.
    pub fn self_checkouts(mut self, count: usize, capacity: usize) -> Self {
        self.counter_count = count;
        self.shared_capacity = capacity;
        self
    }

    pub fn build(self) -> SystemState {
        let humans = (0..self.human_count)
            .map(|i| HumanServer::new(ServerId::from_index(i), self.human_capacity, self.rest_threshold))
            .collect();
        let self_checkouts = (0..self.counter_count)
            .map(|i| SelfCheckout::new(ServerId::from_index(self.human_count + i)))
            .collect();
        SystemState::new(humans, self_checkouts, CustomerQueue::new(self.shared_capacity))
    }
}
