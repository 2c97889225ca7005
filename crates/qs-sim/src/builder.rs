//! Fluent builder for constructing a [`Sim`].

use log::debug;
use qs_core::{CoreResult, CustomerId, RandomSource, SimConfig, SimRng, SimTime};
use qs_event::{Event, EventQueue};
use qs_model::{Customer, Statistics, SystemStateBuilder};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: server counts, capacities, rates, probabilities, …
/// - `R: RandomSource`: [`SimRng`] for real runs, `ScriptedRandom` in tests
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                             |
/// |------------------|-----------------------------------------------------|
/// | `.arrivals(v)`   | Generated from the random source (see [`build`])    |
///
/// [`build`]: SimBuilder::build
///
/// # Example
///
/// ```rust
/// use qs_core::SimConfig;
/// use qs_sim::{NoopObserver, SimBuilder};
///
/// let config = SimConfig { customers: 5, ..SimConfig::default() };
/// let mut sim = SimBuilder::seeded(config).unwrap().build().unwrap();
/// let report = sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(report.stats.resolved(), 5);
/// ```
pub struct SimBuilder<R: RandomSource> {
    config:   SimConfig,
    rng:      R,
    arrivals: Option<Vec<(f64, bool)>>,
}

impl SimBuilder<SimRng> {
    /// A builder drawing from a [`SimRng`] seeded by `config.seed`.
    pub fn seeded(config: SimConfig) -> CoreResult<Self> {
        let rng = SimRng::from_config(&config)?;
        Ok(Self::new(config, rng))
    }
}

impl<R: RandomSource> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self { config, rng, arrivals: None }
    }

    /// Supply the arrival schedule as `(time, greedy)` pairs, one per
    /// customer (must be length `customers`).
    ///
    /// Times must be finite, non-negative and non-decreasing.  If not
    /// called, arrivals are generated from the random source.
    pub fn arrivals(mut self, arrivals: Vec<(f64, bool)>) -> Self {
        self.arrivals = Some(arrivals);
        self
    }

    /// Validate inputs, build the servers and the initial arrival events,
    /// and return a ready-to-run [`Sim`].
    ///
    /// Generated arrivals consume, per customer in order, one customer-type
    /// sample (greedy when below `greedy_probability`) and then one
    /// inter-arrival gap.  The first customer arrives at time 0.
    pub fn build(mut self) -> SimResult<Sim<R>> {
        self.config.validate()?;
        let count = self.config.customers;

        // ── Resolve the arrival schedule ──────────────────────────────────
        let customers = match self.arrivals.take() {
            Some(schedule) => {
                if schedule.len() != count {
                    return Err(SimError::CustomerCountMismatch {
                        expected: count,
                        got:      schedule.len(),
                        what:     "arrival schedule",
                    });
                }
                scheduled_customers(&schedule)?
            }
            None => self.generate_customers()?,
        };

        // ── Build servers and seed the event queue ────────────────────────
        let state = SystemStateBuilder::from_config(&self.config).build();
        let mut queue = EventQueue::new();
        queue.extend(customers.iter().copied().map(Event::arrival));
        debug!(
            "built {} server(s) and {} arrival(s)",
            state.server_count(),
            queue.len(),
        );

        Ok(Sim {
            config: self.config,
            state,
            stats:  Statistics::new(),
            queue,
            log:    Vec::with_capacity(count * 4),
            rng:    self.rng,
            now:    SimTime::ZERO,
        })
    }

    fn generate_customers(&mut self) -> SimResult<Vec<Customer>> {
        let mut customers = Vec::with_capacity(self.config.customers);
        let mut time = SimTime::ZERO;
        for index in 0..self.config.customers {
            let greedy = self.rng.customer_type_sample() < self.config.greedy_probability;
            customers.push(Customer::new(CustomerId::from_index(index), time, greedy));

            let gap = self.rng.inter_arrival();
            time = time.after(gap);
            if !(gap.is_finite() && gap >= 0.0) {
                return Err(SimError::InvalidArrival { index: index + 1, time: time.as_f64() });
            }
        }
        Ok(customers)
    }
}

fn scheduled_customers(schedule: &[(f64, bool)]) -> SimResult<Vec<Customer>> {
    let mut previous = 0.0;
    schedule
        .iter()
        .enumerate()
        .map(|(index, &(time, greedy))| {
            if !(time.is_finite() && time >= previous) {
                return Err(SimError::InvalidArrival { index, time });
            }
            previous = time;
            Ok(Customer::new(CustomerId::from_index(index), SimTime(time), greedy))
        })
        .collect()
}
