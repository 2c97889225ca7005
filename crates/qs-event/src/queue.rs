//! `EventQueue`: pending events in processing order.
//!
//! A binary min-heap keyed by `(time, kind priority, insertion sequence)`.
//! The sequence number makes the order total: two events with the same time
//! and kind come out in the order they were pushed, so a run never depends
//! on heap internals.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use qs_core::SimTime;

use crate::{Event, EventKind};

struct Scheduled {
    time:  SimTime,
    kind:  EventKind,
    seq:   u64,
    event: Event,
}

impl Scheduled {
    #[inline]
    fn key(&self) -> (SimTime, EventKind, u64) {
        (self.time, self.kind, self.seq)
    }
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.key().cmp(&self.key())
    }
}

/// Pending events, popped earliest first.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { time: event.time(), kind: event.kind(), seq, event });
    }

    /// Remove and return the earliest event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|s| s.event)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|s| &s.event)
    }

    /// Timestamp of the earliest pending event, or `None` if empty.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|s| s.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Events pushed since construction.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}

impl Extend<Event> for EventQueue {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }
}
