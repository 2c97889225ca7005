//! Bounded FIFO waiting line.

use std::collections::VecDeque;

use crate::{Customer, ModelError, ModelResult, ServerRef};

/// A waiting line with a fixed capacity.
///
/// Each human server owns one; `SystemState` owns one more that all
/// self-checkout counters drain.
#[derive(Clone, Debug, Default)]
pub struct CustomerQueue {
    items:    VecDeque<Customer>,
    capacity: usize,
}

impl CustomerQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` while another customer may join.
    #[inline]
    pub fn has_space(&self) -> bool {
        self.items.len() < self.capacity
    }

    /// The customer who would be served next, without removing them.
    pub fn front(&self) -> Option<&Customer> {
        self.items.front()
    }

    /// Append `customer` to the back of the line.
    ///
    /// `owner` only labels the error.
    pub fn push(&mut self, customer: Customer, owner: ServerRef) -> ModelResult<()> {
        if !self.has_space() {
            return Err(ModelError::QueueFull { server: owner, capacity: self.capacity });
        }
        self.items.push_back(customer);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Customer> {
        self.items.pop_front()
    }
}
