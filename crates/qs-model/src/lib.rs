//! `qs-model`: the mutable world of the checkout simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`customer`]  | `Customer` (immutable value)                                |
//! | [`queue`]     | `CustomerQueue` (bounded FIFO)                              |
//! | [`server`]    | `HumanServer`, `SelfCheckout`, `ServerState`, `ServerRef`   |
//! | [`state`]     | `SystemState` and the three routing policies                |
//! | [`stats`]     | `Statistics` accumulator                                    |
//! | [`builder`]   | `SystemStateBuilder`                                        |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                              |
//!
//! # Ownership
//!
//! `SystemState` owns every server and the single shared self-checkout
//! queue.  Self-checkout counters hold no queue of their own; every read or
//! write of the shared line goes through `SystemState`, so there is exactly
//! one writer.  Events refer to servers by the `Copy` handle [`ServerRef`].

pub mod builder;
pub mod customer;
pub mod error;
pub mod queue;
pub mod server;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SystemStateBuilder;
pub use customer::Customer;
pub use error::{ModelError, ModelResult};
pub use queue::CustomerQueue;
pub use server::{HumanServer, SelfCheckout, ServerRef, ServerState};
pub use state::SystemState;
pub use stats::Statistics;
