//! `qs-event`: events and the pure transition function.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`event`]      | `Event` (seven variants), `EventKind` (priority table)    |
//! | [`transition`] | `Effect`, `Transition`, `decide`                          |
//! | [`queue`]      | `EventQueue` (min-heap on time, priority, sequence)       |
//! | [`error`]      | `EventError`, `EventResult<T>`                            |
//!
//! # Design notes
//!
//! Processing one event is split in two, like the intent/apply split of a
//! tick-based simulation:
//!
//! 1. **Decide**: `decide(&event, &SystemState, &mut rng)` reads the state,
//!    consumes any random draws the event needs, and returns a
//!    [`Transition`].  No mutation.
//!
//! 2. **Apply** (in `qs-sim`): the transition's effects are applied to the
//!    state and statistics in order, then the successor event is pushed.

pub mod error;
pub mod event;
pub mod queue;
pub mod transition;


pub use error::{EventError, EventResult};
pub use event::{Event, EventKind};
pub use queue::EventQueue;
pub use transition::{Effect, Transition, decide};
