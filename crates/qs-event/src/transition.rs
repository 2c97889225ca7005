//! The transition function: what an event does and what it leads to.
//!
//! [`decide`] reads the state but never mutates it.  It returns the
//! mutations the event requires as a list of [`Effect`]s together with the
//! successor event, and the simulation loop applies both.  This keeps every
//! routing decision testable against a hand-built `SystemState`.
//!
//! | Event     | Effects                           | Successor                              |
//! |-----------|-----------------------------------|----------------------------------------|
//! | `Arrival` | `Enqueue` when routed to a line   | `Served`, `Wait` or `Leave` (same time)|
//! | `Served`  | `StartService`, `RecordServed`    | `Done` after a service draw            |
//! | `Done`    | `BeginRest` or `Release`          | `Rest`, `Served` of the next in line, or none |
//! | `Rest`    | none                              | `Back` after a rest-period draw        |
//! | `Back`    | `EndRest`                         | `Served` of the next in line, or none  |
//! | `Wait`    | none                              | none                                   |
//! | `Leave`   | `RecordLeft`                      | none                                   |
//!
//! A customer joins a line when the `Arrival` routes them there, not when the
//! `Wait` is processed.  `Wait` sorts after `Arrival`, so deferring the
//! enqueue would let simultaneous arrivals all see the same free space.
//!
//! Draws happen in a fixed order: one service draw per `Served`, one rest
//! sample per `Done` at a human server, one rest period per `Rest`.

use log::debug;
use qs_core::{DrawKind, RandomSource, SimTime};
use qs_model::{Customer, ServerRef, SystemState};

use crate::{Event, EventError, EventResult};

/// A single mutation of `SystemState` or `Statistics`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Effect {
    /// Mark `server` as serving `customer`.
    StartService { server: ServerRef, customer: Customer },
    /// Count one served customer who waited `wait`.
    RecordServed { wait: f64 },
    /// Finish the current customer at `server` and pull the next one from
    /// its line.
    Release { server: ServerRef },
    /// Finish the current customer at a human `server` and start its break.
    BeginRest { server: ServerRef },
    /// End the break at `server` and pull the next customer from its queue.
    EndRest { server: ServerRef },
    /// Add `customer` to the line `server` draws from.
    Enqueue { server: ServerRef, customer: Customer },
    /// Count one customer who left unserved.
    RecordLeft,
}

/// The outcome of one event: mutations to apply, then the event to schedule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    pub next:    Option<Event>,
}

impl Transition {
    fn new(effects: Vec<Effect>, next: Option<Event>) -> Self {
        Self { effects, next }
    }
}

/// Compute the transition of `event` against `state`.
///
/// Fails if the state contradicts the event (unknown server, a `Done` for a
/// customer the server is not serving) or a duration draw is unusable.
pub fn decide<R>(event: &Event, state: &SystemState, rng: &mut R) -> EventResult<Transition>
where
    R: RandomSource + ?Sized,
{
    let transition = match *event {
        Event::Arrival { time, customer } => {
            let next = route(time, customer, state);
            let effects = match next {
                Event::Wait { server, .. } => vec![Effect::Enqueue { server, customer }],
                _ => Vec::new(),
            };
            Transition::new(effects, Some(next))
        }

        Event::Served { time, customer, server } => {
            let duration = duration(DrawKind::Service, rng.service_time())?;
            Transition::new(
                vec![
                    Effect::StartService { server, customer },
                    Effect::RecordServed { wait: customer.wait_until(time) },
                ],
                Some(Event::Done { time: time.after(duration), customer, server }),
            )
        }

        Event::Done { time, customer, server } => {
            let found = state.current(server)?.map(|c| c.id);
            if found != Some(customer.id) {
                return Err(EventError::CustomerMismatch { server, expected: customer.id, found });
            }

            let rests = match server {
                ServerRef::Human(id) => {
                    let human = state.human(id)?;
                    human.decide_rest(rng.rest_sample())
                }
                ServerRef::SelfCheckout(_) => false,
            };

            if rests {
                Transition::new(vec![Effect::BeginRest { server }], Some(Event::Rest { time, server }))
            } else {
                let next = next_in_line(time, server, state)?;
                Transition::new(vec![Effect::Release { server }], next)
            }
        }

        Event::Rest { time, server } => {
            let period = duration(DrawKind::RestPeriod, rng.rest_period())?;
            Transition::new(Vec::new(), Some(Event::Back { time: time.after(period), server }))
        }

        Event::Back { time, server } => {
            let next = next_in_line(time, server, state)?;
            Transition::new(vec![Effect::EndRest { server }], next)
        }

        Event::Wait { .. } => Transition::default(),

        Event::Leave { .. } => Transition::new(vec![Effect::RecordLeft], None),
    };

    debug!(
        "{event} -> {} effect(s), next: {}",
        transition.effects.len(),
        transition.next.map_or_else(|| "none".to_owned(), |e| e.to_string()),
    );
    Ok(transition)
}

/// Where an arriving customer goes: straight to a free server, into a line
/// chosen by their routing policy, or out.
fn route(time: SimTime, customer: Customer, state: &SystemState) -> Event {
    if let Some(server) = state.first_servable() {
        return Event::Served { time, customer, server };
    }
    let line = if customer.greedy {
        state.shortest_queue()
    } else {
        state.first_waitable()
    };
    match line {
        Some(server) => Event::Wait { time, customer, server },
        None => Event::Leave { time, customer },
    }
}

/// `Served` for whoever is at the front of `server`'s line, if anyone.
fn next_in_line(time: SimTime, server: ServerRef, state: &SystemState) -> EventResult<Option<Event>> {
    Ok(state
        .queue_of(server)?
        .front()
        .map(|&customer| Event::Served { time, customer, server }))
}

fn duration(kind: DrawKind, value: f64) -> EventResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EventError::InvalidDuration { kind, value })
    }
}
