//! The `Sim` struct and its event loop.

use log::{debug, info, trace};
use qs_core::{CustomerId, RandomSource, SimConfig, SimTime};
use qs_event::{Effect, Event, EventQueue, Transition, decide};
use qs_model::{Customer, ServerRef, Statistics, SystemState};

use crate::{SimError, SimObserver, SimResult};

// ── Report ────────────────────────────────────────────────────────────────────

/// Summary returned by [`Sim::run`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Report {
    /// Number of visible events in the trace.
    pub events:     usize,
    pub stats:      Statistics,
    /// Timestamp of the last processed event.
    pub final_time: SimTime,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<R>` holds all simulation state and drives the event loop:
///
/// 1. **Pop** the earliest pending event (time, then kind priority, then
///    insertion order).
/// 2. **Decide**: [`decide`] computes the event's effects and successor from
///    a read-only view of the state, consuming random draws from `rng`.
/// 3. **Apply** the effects to `state` and `stats` in order.
/// 4. **Schedule** the successor, if any.
/// 5. **Log** the event unless it is `Rest` or `Back`.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource> {
    /// Configuration the run was built from.
    pub config: SimConfig,

    /// Servers and their queues.
    pub state: SystemState,

    /// Served / left counters and accumulated wait.
    pub stats: Statistics,

    /// Pending events.
    pub queue: EventQueue,

    /// Visible events in processing order.
    pub log: Vec<Event>,

    /// Source of every random draw after setup.
    pub rng: R,

    /// Timestamp of the event processed most recently.
    pub now: SimTime,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Process events until the queue is empty.
    ///
    /// Calls observer hooks for every event and once at the end.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Report> {
        info!(
            "run starting: {} human server(s), {} self-checkout(s), {} pending event(s)",
            self.state.humans().len(),
            self.state.self_checkouts().len(),
            self.queue.len(),
        );
        while self.step(observer)? {}
        observer.on_sim_end(&self.stats);

        let report = self.report();
        info!(
            "run finished at {}: {} visible event(s), stats {}",
            report.final_time, report.events, report.stats,
        );
        Ok(report)
    }

    /// Process exactly one event.  Returns `false` when the queue was already
    /// empty.
    ///
    /// Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let Some(event) = self.queue.pop() else {
            return Ok(false);
        };
        self.now = event.time();
        debug!("processing {event}");

        let transition = decide(&event, &self.state, &mut self.rng)?;
        self.apply_effects(&transition)?;
        if let Some(next) = transition.next {
            self.queue.push(next);
        }

        if event.is_visible() {
            self.log.push(event);
            observer.on_event(&event);
        } else {
            observer.on_internal_event(&event);
        }
        Ok(true)
    }

    /// `true` once every event has been processed.
    pub fn is_finished(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn report(&self) -> Report {
        Report {
            events:     self.log.len(),
            stats:      self.stats,
            final_time: self.now,
        }
    }

    // ── Effect application ────────────────────────────────────────────────

    /// Apply a transition's effects in order.
    ///
    /// A server that pulls the next customer from its line must pull exactly
    /// the customer the transition scheduled a `Served` event for.
    fn apply_effects(&mut self, transition: &Transition) -> SimResult<()> {
        let scheduled = scheduled_service(transition.next.as_ref());

        for effect in &transition.effects {
            trace!("apply {effect:?}");
            match *effect {
                Effect::StartService { server, customer } => {
                    self.state.serve(server, customer)?;
                }
                Effect::RecordServed { wait } => {
                    self.stats.record_served(wait);
                }
                Effect::Release { server } => {
                    let pulled = self.state.finish_and_pull_next(server)?;
                    check_pull(server, scheduled, pulled)?;
                }
                Effect::BeginRest { server } => {
                    self.state.begin_rest(server)?;
                }
                Effect::EndRest { server } => {
                    let pulled = self.state.end_rest_and_pull_next(server)?;
                    check_pull(server, scheduled, pulled)?;
                }
                Effect::Enqueue { server, customer } => {
                    self.state.enqueue(server, customer)?;
                }
                Effect::RecordLeft => {
                    self.stats.record_left();
                }
            }
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The customer a `Served` successor is for, if the successor is one.
fn scheduled_service(next: Option<&Event>) -> Option<CustomerId> {
    match next {
        Some(Event::Served { customer, .. }) => Some(customer.id),
        _ => None,
    }
}

fn check_pull(
    server:    ServerRef,
    scheduled: Option<CustomerId>,
    pulled:    Option<Customer>,
) -> SimResult<()> {
    let pulled = pulled.map(|c| c.id);
    if pulled == scheduled {
        Ok(())
    } else {
        Err(SimError::PullMismatch { server, expected: scheduled, pulled })
    }
}
