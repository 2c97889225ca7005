//! `qs-core`: foundational types for the `qsim` checkout simulator.
//!
//! This crate is a dependency of every other `qs-*` crate.  It has no
//! `qs-*` dependencies and few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CustomerId`, `ServerId`                              |
//! | [`time`]        | `SimTime` (totally ordered simulated timestamp)       |
//! | [`config`]      | `SimConfig` and its validation / token parsing        |
//! | [`rng`]         | `RandomSource` trait, `SimRng`, `ScriptedRandom`      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{CustomerId, ServerId};
pub use rng::{DrawKind, RandomSource, ScriptedRandom, SimRng};
pub use time::SimTime;
