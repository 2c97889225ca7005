use qs_core::{CustomerId, ServerId};
use thiserror::Error;

use crate::ServerRef;

/// Precondition violations on servers and queues.
///
/// None of these are recoverable: each one means a routing decision was
/// made against state that did not hold, and the run must stop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("{server} is busy serving customer {serving}")]
    ServerBusy { server: ServerRef, serving: CustomerId },

    #[error("{0} is resting")]
    ServerResting(ServerRef),

    #[error("{0} is not serving anyone")]
    NotServing(ServerRef),

    #[error("{0} is not resting")]
    NotResting(ServerRef),

    #[error("{0} has resting disabled")]
    RestDisabled(ServerRef),

    #[error("queue of {server} is full (capacity {capacity})")]
    QueueFull { server: ServerRef, capacity: usize },

    #[error("no server with id {0}")]
    UnknownServer(ServerId),
}

pub type ModelResult<T> = Result<T, ModelError>;
