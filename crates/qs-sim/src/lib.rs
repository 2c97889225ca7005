//! `qs-sim`: event loop orchestrator for the qsim checkout simulator.
//!
//! # Event loop
//!
//! ```text
//! while let Some(event) = queue.pop():        // (time, priority, seq)
//!   ① Decide    decide(&event, &state, &mut rng) → Transition
//!   ② Apply     for each effect, in order:
//!                 StartService / Release / BeginRest / EndRest / Enqueue
//!                                   → SystemState
//!                 RecordServed / RecordLeft
//!                                   → Statistics
//!   ③ Schedule  push transition.next, if any
//!   ④ Log       visible events → Sim::log + SimObserver::on_event
//!                Rest / Back    → SimObserver::on_internal_event
//! ```
//!
//! The loop ends when the queue drains.  It always does: every customer
//! produces a finite chain of events, and only `Rest`/`Back` can repeat,
//! once per completed service.
//!
//! # Quick-start
//!
//! ```rust
//! use qs_core::SimConfig;
//! use qs_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::from_tokens("1 2 1 2 20 1.0 1.0 1.0 0.1 0.5").unwrap();
//! let mut sim = SimBuilder::seeded(config).unwrap().build().unwrap();
//! let report = sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(report.stats.served + report.stats.left, 20);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Report, Sim};
