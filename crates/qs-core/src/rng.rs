//! Random draw sources for the simulation.
//!
//! # Determinism strategy
//!
//! The engine consumes five kinds of draws (see [`DrawKind`]).  [`SimRng`]
//! gives each kind its own `SmallRng` stream, seeded by:
//!
//!   stream_seed = global_seed XOR ((kind + 1) * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive stream indices across the seed space.  This
//! means:
//!
//! - The sequence of service times does not depend on how many rest
//!   decisions were drawn in between (and likewise for every other kind).
//! - Events consult the source in a fixed order tied to the event sequence,
//!   so a fixed seed reproduces the same trace.
//!
//! [`ScriptedRandom`] replays caller-supplied values and is the mocked
//! source used by tests.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::Exp;

use crate::{CoreError, CoreResult, SimConfig};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The five independent draws the simulation needs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    InterArrival,
    Service,
    RestPeriod,
    RestSample,
    CustomerType,
}

impl DrawKind {
    pub const ALL: [DrawKind; 5] = [
        DrawKind::InterArrival,
        DrawKind::Service,
        DrawKind::RestPeriod,
        DrawKind::RestSample,
        DrawKind::CustomerType,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            DrawKind::InterArrival => 0,
            DrawKind::Service      => 1,
            DrawKind::RestPeriod   => 2,
            DrawKind::RestSample   => 3,
            DrawKind::CustomerType => 4,
        }
    }
}

/// A deterministic source of the simulation's random draws.
///
/// Durations must be finite and non-negative; samples lie in `[0, 1)`.
pub trait RandomSource {
    /// Gap between two consecutive arrivals.
    fn inter_arrival(&mut self) -> f64;

    /// Duration of one service.
    fn service_time(&mut self) -> f64;

    /// Duration of one rest period.
    fn rest_period(&mut self) -> f64;

    /// Uniform sample compared against a server's rest threshold.
    fn rest_sample(&mut self) -> f64;

    /// Uniform sample compared against the greedy-customer threshold.
    fn customer_type_sample(&mut self) -> f64;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded random source with one stream per [`DrawKind`].
///
/// Durations are exponentially distributed with the configured rates.
pub struct SimRng {
    streams:  [SmallRng; 5],
    arrival:  Exp<f64>,
    service:  Exp<f64>,
    /// `None` when resting is disabled; `rest_period` then returns 0.
    rest:     Option<Exp<f64>>,
}

impl SimRng {
    /// Seed all streams from `seed` and build the three duration
    /// distributions.  `rest_rate <= 0` disables rest periods.
    pub fn new(seed: u64, arrival_rate: f64, service_rate: f64, rest_rate: f64) -> CoreResult<Self> {
        let streams = std::array::from_fn(|slot| {
            let offset = (slot as u64 + 1).wrapping_mul(MIXING_CONSTANT);
            SmallRng::seed_from_u64(seed ^ offset)
        });
        let arrival = Exp::new(arrival_rate).map_err(|_| CoreError::InvalidRate {
            what:  "arrival_rate",
            value: arrival_rate,
        })?;
        let service = Exp::new(service_rate).map_err(|_| CoreError::InvalidRate {
            what:  "service_rate",
            value: service_rate,
        })?;
        let rest = if rest_rate > 0.0 {
            Some(Exp::new(rest_rate).map_err(|_| CoreError::InvalidRate {
                what:  "rest_rate",
                value: rest_rate,
            })?)
        } else {
            None
        };
        Ok(Self { streams, arrival, service, rest })
    }

    /// Build from a validated configuration.
    pub fn from_config(config: &SimConfig) -> CoreResult<Self> {
        Self::new(config.seed, config.arrival_rate, config.service_rate, config.rest_rate)
    }

    #[inline]
    fn stream(&mut self, kind: DrawKind) -> &mut SmallRng {
        &mut self.streams[kind.slot()]
    }
}

impl RandomSource for SimRng {
    fn inter_arrival(&mut self) -> f64 {
        let dist = self.arrival;
        self.stream(DrawKind::InterArrival).sample(dist)
    }

    fn service_time(&mut self) -> f64 {
        let dist = self.service;
        self.stream(DrawKind::Service).sample(dist)
    }

    fn rest_period(&mut self) -> f64 {
        match self.rest {
            Some(dist) => self.stream(DrawKind::RestPeriod).sample(dist),
            None => 0.0,
        }
    }

    fn rest_sample(&mut self) -> f64 {
        self.stream(DrawKind::RestSample).r#gen::<f64>()
    }

    fn customer_type_sample(&mut self) -> f64 {
        self.stream(DrawKind::CustomerType).r#gen::<f64>()
    }
}

// ── ScriptedRandom ────────────────────────────────────────────────────────────

/// A random source that replays fixed values.
///
/// Each [`DrawKind`] has a queue of scripted values and a fallback constant
/// returned once the queue is exhausted.  Defaults: every duration is `1.0`,
/// both samples are `1.0` (never rest, never greedy).
///
/// ```
/// use qs_core::{DrawKind, RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new()
///     .constant(DrawKind::Service, 2.0)
///     .sequence(DrawKind::InterArrival, [0.5, 0.25]);
///
/// assert_eq!(rng.service_time(), 2.0);
/// assert_eq!(rng.inter_arrival(), 0.5);
/// assert_eq!(rng.inter_arrival(), 0.25);
/// assert_eq!(rng.inter_arrival(), 1.0);
/// assert_eq!(rng.draws(DrawKind::InterArrival), 3);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    scripted: [VecDeque<f64>; 5],
    fallback: [f64; 5],
    draws:    [usize; 5],
}

impl Default for ScriptedRandom {
    fn default() -> Self {
        Self {
            scripted: Default::default(),
            fallback: [1.0; 5],
            draws:    [0; 5],
        }
    }
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fallback value for `kind`.
    pub fn constant(mut self, kind: DrawKind, value: f64) -> Self {
        self.fallback[kind.slot()] = value;
        self
    }

    /// Append values returned (in order) before the fallback kicks in.
    pub fn sequence<I: IntoIterator<Item = f64>>(mut self, kind: DrawKind, values: I) -> Self {
        self.scripted[kind.slot()].extend(values);
        self
    }

    /// How many values of `kind` have been drawn so far.
    pub fn draws(&self, kind: DrawKind) -> usize {
        self.draws[kind.slot()]
    }

    fn draw(&mut self, kind: DrawKind) -> f64 {
        let slot = kind.slot();
        self.draws[slot] += 1;
        self.scripted[slot].pop_front().unwrap_or(self.fallback[slot])
    }
}

impl RandomSource for ScriptedRandom {
    fn inter_arrival(&mut self) -> f64 {
        self.draw(DrawKind::InterArrival)
    }

    fn service_time(&mut self) -> f64 {
        self.draw(DrawKind::Service)
    }

    fn rest_period(&mut self) -> f64 {
        self.draw(DrawKind::RestPeriod)
    }

    fn rest_sample(&mut self) -> f64 {
        self.draw(DrawKind::RestSample)
    }

    fn customer_type_sample(&mut self) -> f64 {
        self.draw(DrawKind::CustomerType)
    }
}
