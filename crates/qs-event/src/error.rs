use qs_core::{CustomerId, DrawKind};
use qs_model::{ModelError, ServerRef};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EventError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{kind:?} draw returned {value}; durations must be finite and non-negative")]
    InvalidDuration { kind: DrawKind, value: f64 },

    #[error("{server} should hold customer {expected}, found {found:?}")]
    CustomerMismatch {
        server:   ServerRef,
        expected: CustomerId,
        found:    Option<CustomerId>,
    },
}

pub type EventResult<T> = Result<T, EventError>;
