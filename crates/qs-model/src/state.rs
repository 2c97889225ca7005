//! `SystemState`: every server plus the shared self-checkout line, and the
//! routing policies evaluated against them.

use log::trace;
use qs_core::ServerId;

use crate::{Customer, CustomerQueue, HumanServer, ModelError, ModelResult, SelfCheckout, ServerRef};

/// The facility: human servers, self-checkout counters, and the one queue
/// the counters share.
///
/// The set of servers is fixed at construction.  Server state changes only
/// through the mutation methods below, which the simulation loop calls while
/// applying a transition's effects.
///
/// Ids are contiguous: humans hold `1..=h`, counters `h+1..=h+s`, so lookup
/// is an index computation.
#[derive(Clone, Debug)]
pub struct SystemState {
    humans:         Vec<HumanServer>,
    self_checkouts: Vec<SelfCheckout>,
    shared:         CustomerQueue,
}

impl SystemState {
    /// Assemble a state from already-numbered servers.  Prefer
    /// [`SystemStateBuilder`](crate::SystemStateBuilder), which assigns ids.
    pub fn new(
        humans:         Vec<HumanServer>,
        self_checkouts: Vec<SelfCheckout>,
        shared:         CustomerQueue,
    ) -> Self {
        Self { humans, self_checkouts, shared }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn humans(&self) -> &[HumanServer] {
        &self.humans
    }

    pub fn self_checkouts(&self) -> &[SelfCheckout] {
        &self.self_checkouts
    }

    pub fn shared_queue(&self) -> &CustomerQueue {
        &self.shared
    }

    pub fn server_count(&self) -> usize {
        self.humans.len() + self.self_checkouts.len()
    }

    /// Map a raw id to its handle.
    pub fn resolve(&self, id: ServerId) -> Option<ServerRef> {
        if id.0 == 0 {
            return None;
        }
        let index = id.index();
        if index < self.humans.len() {
            Some(ServerRef::Human(id))
        } else if index < self.server_count() {
            Some(ServerRef::SelfCheckout(id))
        } else {
            None
        }
    }

    pub fn human(&self, id: ServerId) -> ModelResult<&HumanServer> {
        self.humans
            .get(id.0.wrapping_sub(1) as usize)
            .filter(|s| s.id == id)
            .ok_or(ModelError::UnknownServer(id))
    }

    pub fn self_checkout(&self, id: ServerId) -> ModelResult<&SelfCheckout> {
        self.self_checkout_slot(id)
            .and_then(|i| self.self_checkouts.get(i))
            .filter(|s| s.id == id)
            .ok_or(ModelError::UnknownServer(id))
    }

    /// The line `server` draws from: its private queue, or the shared one.
    pub fn queue_of(&self, server: ServerRef) -> ModelResult<&CustomerQueue> {
        match server {
            ServerRef::Human(id) => Ok(self.human(id)?.queue()),
            ServerRef::SelfCheckout(id) => {
                self.self_checkout(id)?;
                Ok(&self.shared)
            }
        }
    }

    /// The customer `server` is serving, if any.
    pub fn current(&self, server: ServerRef) -> ModelResult<Option<&Customer>> {
        match server {
            ServerRef::Human(id)        => Ok(self.human(id)?.current()),
            ServerRef::SelfCheckout(id) => Ok(self.self_checkout(id)?.current()),
        }
    }

    pub fn is_resting(&self, server: ServerRef) -> ModelResult<bool> {
        match server {
            ServerRef::Human(id)        => Ok(self.human(id)?.is_resting()),
            ServerRef::SelfCheckout(id) => self.self_checkout(id).map(|_| false),
        }
    }

    // ── Routing policies ──────────────────────────────────────────────────

    /// First server able to start service right now: humans in order, then
    /// self-checkout counters in order.
    pub fn first_servable(&self) -> Option<ServerRef> {
        self.humans
            .iter()
            .find(|s| s.can_serve())
            .map(HumanServer::handle)
            .or_else(|| {
                self.self_checkouts
                    .iter()
                    .find(|s| s.can_serve())
                    .map(SelfCheckout::handle)
            })
    }

    /// Ordinary-customer routing: the first human whose queue has space,
    /// otherwise the first counter if the shared line has space.
    ///
    /// The first counter stands in for the shared line; whichever counter
    /// frees up first will actually serve the customer.
    pub fn first_waitable(&self) -> Option<ServerRef> {
        self.humans
            .iter()
            .find(|s| s.queue().has_space())
            .map(HumanServer::handle)
            .or_else(|| self.shared_line_handle())
    }

    /// Greedy-customer routing: the queue with the fewest waiting customers
    /// among those with space.
    ///
    /// Humans are scanned in order and the first minimum wins.  The shared
    /// line replaces it only when strictly shorter, so a tie goes to the
    /// human server.
    pub fn shortest_queue(&self) -> Option<ServerRef> {
        let mut best: Option<(ServerRef, usize)> = None;
        for server in &self.humans {
            let queue = server.queue();
            if !queue.has_space() {
                continue;
            }
            if best.is_none_or(|(_, len)| queue.len() < len) {
                best = Some((server.handle(), queue.len()));
            }
        }

        if let Some(shared) = self.shared_line_handle() {
            let shared_len = self.shared.len();
            if best.is_none_or(|(_, len)| shared_len < len) {
                best = Some((shared, shared_len));
            }
        }

        best.map(|(server, _)| server)
    }

    /// The first counter, if one exists and the shared line has space.
    fn shared_line_handle(&self) -> Option<ServerRef> {
        if !self.shared.has_space() {
            return None;
        }
        self.self_checkouts.first().map(SelfCheckout::handle)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Start (or confirm a handed-over) service of `customer` at `server`.
    pub fn serve(&mut self, server: ServerRef, customer: Customer) -> ModelResult<()> {
        trace!("{server} serves customer {customer}");
        match server {
            ServerRef::Human(id)        => self.human_mut(id)?.serve(customer),
            ServerRef::SelfCheckout(id) => self.self_checkout_mut(id)?.serve(customer),
        }
    }

    /// Finish the current customer at `server` and hand it the next one from
    /// its line (private or shared).
    pub fn finish_and_pull_next(&mut self, server: ServerRef) -> ModelResult<Option<Customer>> {
        let next = match server {
            ServerRef::Human(id) => self.human_mut(id)?.finish_and_pull_next()?,
            ServerRef::SelfCheckout(id) => {
                let slot = self
                    .self_checkout_slot(id)
                    .filter(|&i| i < self.self_checkouts.len())
                    .ok_or(ModelError::UnknownServer(id))?;
                self.self_checkouts[slot].finish_and_pull_next(&mut self.shared)?
            }
        };
        trace!("{server} finished; next in line: {next:?}");
        Ok(next)
    }

    /// Serving → Resting: the finished customer leaves and the server goes
    /// on a break.
    pub fn begin_rest(&mut self, server: ServerRef) -> ModelResult<()> {
        let ServerRef::Human(id) = server else {
            return Err(ModelError::RestDisabled(server));
        };
        let human = self.human_mut(id)?;
        if !(human.rest_threshold() > 0.0) {
            return Err(ModelError::RestDisabled(server));
        }
        human.finish()?;
        human.toggle_rest()?;
        trace!("{server} begins rest");
        Ok(())
    }

    /// Resting → Idle, then take the next customer from the private queue.
    pub fn end_rest_and_pull_next(&mut self, server: ServerRef) -> ModelResult<Option<Customer>> {
        let ServerRef::Human(id) = server else {
            return Err(ModelError::NotResting(server));
        };
        let human = self.human_mut(id)?;
        if !human.is_resting() {
            return Err(ModelError::NotResting(server));
        }
        human.toggle_rest()?;
        let next = human.pull_next()?;
        trace!("{server} back from rest; next in line: {next:?}");
        Ok(next)
    }

    /// Put `customer` in the line `server` draws from.
    pub fn enqueue(&mut self, server: ServerRef, customer: Customer) -> ModelResult<()> {
        trace!("customer {customer} joins the line of {server}");
        match server {
            ServerRef::Human(id) => self.human_mut(id)?.enqueue(customer),
            ServerRef::SelfCheckout(id) => {
                self.self_checkout(id)?;
                self.shared.push(customer, server)
            }
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn self_checkout_slot(&self, id: ServerId) -> Option<usize> {
        (id.0 as usize).checked_sub(self.humans.len() + 1)
    }

    fn human_mut(&mut self, id: ServerId) -> ModelResult<&mut HumanServer> {
        self.humans
            .get_mut(id.0.wrapping_sub(1) as usize)
            .filter(|s| s.id == id)
            .ok_or(ModelError::UnknownServer(id))
    }

    fn self_checkout_mut(&mut self, id: ServerId) -> ModelResult<&mut SelfCheckout> {
        let slot = self.self_checkout_slot(id);
        slot.and_then(|i| self.self_checkouts.get_mut(i))
            .filter(|s| s.id == id)
            .ok_or(ModelError::UnknownServer(id))
    }
}
