//! Simulation configuration.

use crate::{CoreError, CoreResult};

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON file or the whitespace-separated parameter
/// line by the application crate, validated, and passed to the sim builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces an identical trace.
    pub seed: u64,

    /// Number of human servers, each with a private waiting queue.
    pub human_servers: usize,

    /// Number of self-checkout counters sharing one waiting queue.
    pub self_checkouts: usize,

    /// Maximum length of each human server's private queue.
    pub queue_capacity: usize,

    /// Maximum length of the shared self-checkout queue.  `None` uses
    /// `queue_capacity`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub self_checkout_capacity: Option<usize>,

    /// Number of customers generated by the arrival process.
    pub customers: usize,

    /// Rate λ of the exponential inter-arrival distribution.
    pub arrival_rate: f64,

    /// Rate μ of the exponential service-time distribution.
    pub service_rate: f64,

    /// Rate ρ of the exponential rest-period distribution.
    pub rest_rate: f64,

    /// Probability that a human server rests after finishing a customer.
    pub rest_probability: f64,

    /// Probability that a generated customer is greedy.
    pub greedy_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                   1,
            human_servers:          1,
            self_checkouts:         0,
            queue_capacity:         1,
            self_checkout_capacity: None,
            customers:              0,
            arrival_rate:           1.0,
            service_rate:           1.0,
            rest_rate:              1.0,
            rest_probability:       0.0,
            greedy_probability:     0.0,
        }
    }
}

impl SimConfig {
    /// Parse the ten-token parameter line:
    ///
    /// ```text
    /// seed humans self_checkouts queue_capacity customers λ μ ρ Pr Pg
    /// ```
    ///
    /// Tokens may be separated by any whitespace (including newlines).
    /// The result is validated before it is returned.
    pub fn from_tokens(input: &str) -> CoreResult<Self> {
        let mut tokens = input.split_whitespace();
        let mut next = |name: &'static str| {
            tokens
                .next()
                .ok_or_else(|| CoreError::Parse(format!("missing value for {name}")))
        };

        let config = SimConfig {
            seed:                   parse(next("seed")?, "seed")?,
            human_servers:          parse(next("human_servers")?, "human_servers")?,
            self_checkouts:         parse(next("self_checkouts")?, "self_checkouts")?,
            queue_capacity:         parse(next("queue_capacity")?, "queue_capacity")?,
            customers:              parse(next("customers")?, "customers")?,
            arrival_rate:           parse(next("arrival_rate")?, "arrival_rate")?,
            service_rate:           parse(next("service_rate")?, "service_rate")?,
            rest_rate:              parse(next("rest_rate")?, "rest_rate")?,
            rest_probability:       parse(next("rest_probability")?, "rest_probability")?,
            greedy_probability:     parse(next("greedy_probability")?, "greedy_probability")?,
            self_checkout_capacity: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Capacity of the shared self-checkout queue.
    #[inline]
    pub fn shared_capacity(&self) -> usize {
        self.self_checkout_capacity.unwrap_or(self.queue_capacity)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        check_rate("arrival_rate", self.arrival_rate)?;
        check_rate("service_rate", self.service_rate)?;
        check_probability("rest_probability", self.rest_probability)?;
        check_probability("greedy_probability", self.greedy_probability)?;
        if self.rest_probability > 0.0 {
            check_rate("rest_rate", self.rest_rate)?;
        }
        if self.customers > u32::MAX as usize {
            return Err(CoreError::Config(format!(
                "customer count {} exceeds the id space",
                self.customers
            )));
        }
        if self.human_servers + self.self_checkouts > u32::MAX as usize {
            return Err(CoreError::Config("server count exceeds the id space".into()));
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse<T: std::str::FromStr>(token: &str, name: &'static str) -> CoreResult<T> {
    token
        .parse::<T>()
        .map_err(|_| CoreError::Parse(format!("invalid value {token:?} for {name}")))
}

fn check_rate(what: &'static str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidRate { what, value })
    }
}

fn check_probability(what: &'static str, value: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Config(format!("{what} must lie in [0, 1], got {value}")))
    }
}
