//! Human servers and self-checkout counters.
//!
//! The two kinds are separate types.  Only [`HumanServer`] has a rest cycle
//! and a private queue; a [`SelfCheckout`] holds nothing but the customer it
//! is serving, and its queue operations take the shared line explicitly.

use std::fmt;

use qs_core::ServerId;

use crate::{Customer, CustomerQueue, ModelError, ModelResult};

// ── ServerRef ─────────────────────────────────────────────────────────────────

/// A cheap handle naming one server, carried by events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ServerRef {
    Human(ServerId),
    SelfCheckout(ServerId),
}

/// Trace token: `server <id>` or `self-check <id>`.
impl fmt::Display for ServerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerRef::Human(id)        => write!(f, "server {id}"),
            ServerRef::SelfCheckout(id) => write!(f, "self-check {id}"),
        }
    }
}

// ── HumanServer ───────────────────────────────────────────────────────────────

/// What a human server is doing right now.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ServerState {
    Idle,
    Serving(Customer),
    Resting,
}

/// A staffed counter with its own bounded queue and a probabilistic rest
/// cycle.
#[derive(Clone, Debug)]
pub struct HumanServer {
    pub id:         ServerId,
    queue:          CustomerQueue,
    /// Rest decision samples strictly below this value send the server on a
    /// break.  `0.0` disables resting.
    rest_threshold: f64,
    state:          ServerState,
}

impl HumanServer {
    pub fn new(id: ServerId, capacity: usize, rest_threshold: f64) -> Self {
        Self {
            id,
            queue: CustomerQueue::new(capacity),
            rest_threshold,
            state: ServerState::Idle,
        }
    }

    #[inline]
    pub fn handle(&self) -> ServerRef {
        ServerRef::Human(self.id)
    }

    pub fn state(&self) -> ServerState {
        self.state
    }

    pub fn queue(&self) -> &CustomerQueue {
        &self.queue
    }

    pub fn rest_threshold(&self) -> f64 {
        self.rest_threshold
    }

    /// Idle and not resting.
    #[inline]
    pub fn can_serve(&self) -> bool {
        self.state == ServerState::Idle
    }

    pub fn is_resting(&self) -> bool {
        self.state == ServerState::Resting
    }

    /// The customer being served, if any.
    pub fn current(&self) -> Option<&Customer> {
        match &self.state {
            ServerState::Serving(c) => Some(c),
            _ => None,
        }
    }

    /// Start serving `customer`.
    ///
    /// Accepts an idle server, or one already holding `customer` because
    /// [`pull_next`](Self::pull_next) handed it over.
    pub fn serve(&mut self, customer: Customer) -> ModelResult<()> {
        match self.state {
            ServerState::Resting => Err(ModelError::ServerResting(self.handle())),
            ServerState::Serving(current) if current.id != customer.id => {
                Err(ModelError::ServerBusy { server: self.handle(), serving: current.id })
            }
            _ => {
                self.state = ServerState::Serving(customer);
                Ok(())
            }
        }
    }

    /// Serving → Idle.  Returns the customer who was being served.
    pub fn finish(&mut self) -> ModelResult<Customer> {
        match self.state {
            ServerState::Serving(done) => {
                self.state = ServerState::Idle;
                Ok(done)
            }
            _ => Err(ModelError::NotServing(self.handle())),
        }
    }

    /// Idle → Serving(front of queue) when someone is waiting.
    pub fn pull_next(&mut self) -> ModelResult<Option<Customer>> {
        match self.state {
            ServerState::Resting => Err(ModelError::ServerResting(self.handle())),
            ServerState::Serving(current) => {
                Err(ModelError::ServerBusy { server: self.handle(), serving: current.id })
            }
            ServerState::Idle => {
                let next = self.queue.pop();
                if let Some(c) = next {
                    self.state = ServerState::Serving(c);
                }
                Ok(next)
            }
        }
    }

    /// Finish the current customer and immediately take the next one in line.
    pub fn finish_and_pull_next(&mut self) -> ModelResult<Option<Customer>> {
        self.finish()?;
        self.pull_next()
    }

    /// Whether a rest decision sample sends this server on a break.
    #[inline]
    pub fn decide_rest(&self, sample: f64) -> bool {
        sample < self.rest_threshold
    }

    /// Idle ⇄ Resting.
    pub fn toggle_rest(&mut self) -> ModelResult<()> {
        if !(self.rest_threshold > 0.0) {
            return Err(ModelError::RestDisabled(self.handle()));
        }
        self.state = match self.state {
            ServerState::Idle    => ServerState::Resting,
            ServerState::Resting => ServerState::Idle,
            ServerState::Serving(current) => {
                return Err(ModelError::ServerBusy { server: self.handle(), serving: current.id });
            }
        };
        Ok(())
    }

    /// Put `customer` at the back of this server's queue.
    pub fn enqueue(&mut self, customer: Customer) -> ModelResult<()> {
        let handle = self.handle();
        self.queue.push(customer, handle)
    }
}

// ── SelfCheckout ──────────────────────────────────────────────────────────────

/// An unstaffed counter.  Never rests; waits on the shared queue owned by
/// `SystemState`.
#[derive(Clone, Debug)]
pub struct SelfCheckout {
    pub id:  ServerId,
    current: Option<Customer>,
}

impl SelfCheckout {
    pub fn new(id: ServerId) -> Self {
        Self { id, current: None }
    }

    #[inline]
    pub fn handle(&self) -> ServerRef {
        ServerRef::SelfCheckout(self.id)
    }

    #[inline]
    pub fn can_serve(&self) -> bool {
        self.current.is_none()
    }

    pub fn current(&self) -> Option<&Customer> {
        self.current.as_ref()
    }

    /// Start serving `customer`; see [`HumanServer::serve`].
    pub fn serve(&mut self, customer: Customer) -> ModelResult<()> {
        match self.current {
            Some(current) if current.id != customer.id => {
                Err(ModelError::ServerBusy { server: self.handle(), serving: current.id })
            }
            _ => {
                self.current = Some(customer);
                Ok(())
            }
        }
    }

    pub fn finish(&mut self) -> ModelResult<Customer> {
        self.current.take().ok_or(ModelError::NotServing(self.handle()))
    }

    /// Take the front of the shared line if this counter is free.
    pub fn pull_next(&mut self, shared: &mut CustomerQueue) -> ModelResult<Option<Customer>> {
        if let Some(current) = self.current {
            return Err(ModelError::ServerBusy { server: self.handle(), serving: current.id });
        }
        self.current = shared.pop();
        Ok(self.current)
    }

    pub fn finish_and_pull_next(&mut self, shared: &mut CustomerQueue) -> ModelResult<Option<Customer>> {
        self.finish()?;
        self.pull_next(shared)
    }
}
