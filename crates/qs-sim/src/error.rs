use qs_core::{CoreError, CustomerId};
use qs_event::EventError;
use qs_model::{ModelError, ServerRef};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("{what} length {got} does not match customer count {expected}")]
    CustomerCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("arrival {index} at time {time} is not finite, negative, or earlier than its predecessor")]
    InvalidArrival { index: usize, time: f64 },

    #[error("{server} pulled customer {pulled:?} but the transition scheduled {expected:?}")]
    PullMismatch {
        server:   ServerRef,
        expected: Option<CustomerId>,
        pulled:   Option<CustomerId>,
    },

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("event error: {0}")]
    Event(#[from] EventError),
}

pub type SimResult<T> = Result<T, SimError>;
