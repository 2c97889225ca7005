//! Unit tests for qs-model.

use qs_core::{CustomerId, ServerId, SimTime};

use crate::{Customer, SystemState, SystemStateBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn customer(id: u32) -> Customer {
    Customer::new(CustomerId(id), SimTime::ZERO, false)
}

fn greedy(id: u32) -> Customer {
    Customer::new(CustomerId(id), SimTime::ZERO, true)
}

fn facility(humans: usize, capacity: usize, counters: usize, shared: usize) -> SystemState {
    SystemStateBuilder::new()
        .humans(humans, capacity, 0.0)
        .self_checkouts(counters, shared)
        .build()
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod customer_tests {
    use super::*;

    #[test]
    fn display_tokens() {
        assert_eq!(customer(3).to_string(), "3");
        assert_eq!(greedy(4).to_string(), "4(greedy)");
    }

    #[test]
    fn wait_time() {
        let c = Customer::new(CustomerId(1), SimTime(1.5), false);
        assert_eq!(c.wait_until(SimTime(4.0)), 2.5);
        assert_eq!(c.wait_until(SimTime(1.5)), 0.0);
    }
}

// ── CustomerQueue ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_tests {
    use super::*;
    use crate::{CustomerQueue, ModelError, ServerRef};

    const OWNER: ServerRef = ServerRef::Human(ServerId(1));

    #[test]
    fn fifo_order() {
        let mut q = CustomerQueue::new(3);
        q.push(customer(1), OWNER).unwrap();
        q.push(customer(2), OWNER).unwrap();
        assert_eq!(q.front().map(|c| c.id), Some(CustomerId(1)));
        assert_eq!(q.pop().map(|c| c.id), Some(CustomerId(1)));
        assert_eq!(q.pop().map(|c| c.id), Some(CustomerId(2)));
        assert!(q.pop().is_none());
    }

    #[test]
    fn push_past_capacity_fails() {
        let mut q = CustomerQueue::new(1);
        q.push(customer(1), OWNER).unwrap();
        assert!(!q.has_space());
        let err = q.push(customer(2), OWNER).unwrap_err();
        assert_eq!(err, ModelError::QueueFull { server: OWNER, capacity: 1 });
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn zero_capacity_never_has_space() {
        let q = CustomerQueue::new(0);
        assert!(!q.has_space());
        assert!(q.is_empty());
    }
}

// ── Servers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod server_tests {
    use super::*;
    use crate::{CustomerQueue, HumanServer, ModelError, SelfCheckout, ServerRef, ServerState};

    #[test]
    fn handle_display() {
        assert_eq!(ServerRef::Human(ServerId(1)).to_string(), "server 1");
        assert_eq!(ServerRef::SelfCheckout(ServerId(3)).to_string(), "self-check 3");
    }

    #[test]
    fn serve_then_finish() {
        let mut s = HumanServer::new(ServerId(1), 1, 0.0);
        assert!(s.can_serve());
        s.serve(customer(1)).unwrap();
        assert!(!s.can_serve());
        assert_eq!(s.current().map(|c| c.id), Some(CustomerId(1)));
        assert_eq!(s.finish().unwrap().id, CustomerId(1));
        assert_eq!(s.state(), ServerState::Idle);
    }

    #[test]
    fn serve_busy_fails() {
        let mut s = HumanServer::new(ServerId(1), 1, 0.0);
        s.serve(customer(1)).unwrap();
        let err = s.serve(customer(2)).unwrap_err();
        assert_eq!(
            err,
            ModelError::ServerBusy { server: ServerRef::Human(ServerId(1)), serving: CustomerId(1) }
        );
    }

    #[test]
    fn finish_and_pull_next_hands_over() {
        let mut s = HumanServer::new(ServerId(1), 2, 0.0);
        s.serve(customer(1)).unwrap();
        s.enqueue(customer(2)).unwrap();
        let next = s.finish_and_pull_next().unwrap();
        assert_eq!(next.map(|c| c.id), Some(CustomerId(2)));
        // The handed-over customer may be confirmed by `serve`.
        s.serve(customer(2)).unwrap();
        assert!(s.queue().is_empty());
        // Nobody left: the server goes idle.
        assert!(s.finish_and_pull_next().unwrap().is_none());
        assert!(s.can_serve());
    }

    #[test]
    fn finish_when_idle_fails() {
        let mut s = HumanServer::new(ServerId(2), 1, 0.0);
        assert_eq!(s.finish().unwrap_err(), ModelError::NotServing(ServerRef::Human(ServerId(2))));
    }

    #[test]
    fn rest_cycle() {
        let mut s = HumanServer::new(ServerId(1), 1, 0.5);
        assert!(s.decide_rest(0.49));
        assert!(!s.decide_rest(0.5));
        s.toggle_rest().unwrap();
        assert!(s.is_resting());
        assert!(!s.can_serve());
        assert_eq!(s.serve(customer(1)).unwrap_err(), ModelError::ServerResting(s.handle()));
        s.toggle_rest().unwrap();
        assert!(s.can_serve());
    }

    #[test]
    fn rest_disabled_without_threshold() {
        let mut s = HumanServer::new(ServerId(1), 1, 0.0);
        assert!(!s.decide_rest(0.0));
        assert_eq!(s.toggle_rest().unwrap_err(), ModelError::RestDisabled(s.handle()));
    }

    #[test]
    fn rest_while_serving_fails() {
        let mut s = HumanServer::new(ServerId(1), 1, 1.0);
        s.serve(customer(1)).unwrap();
        assert!(matches!(s.toggle_rest(), Err(ModelError::ServerBusy { .. })));
    }

    #[test]
    fn self_checkout_pulls_from_shared_line() {
        let mut shared = CustomerQueue::new(2);
        let mut a = SelfCheckout::new(ServerId(2));
        let mut b = SelfCheckout::new(ServerId(3));
        a.serve(customer(1)).unwrap();
        b.serve(customer(2)).unwrap();
        shared.push(customer(3), a.handle()).unwrap();

        assert_eq!(b.finish_and_pull_next(&mut shared).unwrap().map(|c| c.id), Some(CustomerId(3)));
        assert!(a.finish_and_pull_next(&mut shared).unwrap().is_none());
        assert!(a.can_serve());
        assert!(!b.can_serve());
    }
}

// ── SystemState ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;
    use crate::{ModelError, ServerRef};

    const H1: ServerRef = ServerRef::Human(ServerId(1));
    const H2: ServerRef = ServerRef::Human(ServerId(2));
    const S2: ServerRef = ServerRef::SelfCheckout(ServerId(2));
    const S3: ServerRef = ServerRef::SelfCheckout(ServerId(3));
    const S4: ServerRef = ServerRef::SelfCheckout(ServerId(4));

    #[test]
    fn ids_are_contiguous() {
        let state = facility(2, 1, 2, 1);
        assert_eq!(state.resolve(ServerId(1)), Some(H1));
        assert_eq!(state.resolve(ServerId(2)), Some(H2));
        assert_eq!(state.resolve(ServerId(3)), Some(S3));
        assert_eq!(state.resolve(ServerId(4)), Some(S4));
        assert_eq!(state.resolve(ServerId(5)), None);
        assert_eq!(state.resolve(ServerId(0)), None);
    }

    #[test]
    fn unknown_server_errors() {
        let mut state = facility(1, 1, 0, 0);
        assert_eq!(
            state.serve(ServerRef::Human(ServerId(9)), customer(1)).unwrap_err(),
            ModelError::UnknownServer(ServerId(9))
        );
        assert!(state.enqueue(ServerRef::SelfCheckout(ServerId(2)), customer(1)).is_err());
    }

    #[test]
    fn first_servable_prefers_humans_in_order() {
        let mut state = facility(2, 1, 2, 2);
        assert_eq!(state.first_servable(), Some(H1));
        state.serve(H1, customer(1)).unwrap();
        assert_eq!(state.first_servable(), Some(H2));
        state.serve(H2, customer(2)).unwrap();
        assert_eq!(state.first_servable(), Some(S3));
        state.serve(S3, customer(3)).unwrap();
        assert_eq!(state.first_servable(), Some(S4));
        state.serve(S4, customer(4)).unwrap();
        assert_eq!(state.first_servable(), None);
    }

    #[test]
    fn first_waitable_falls_back_to_first_counter() {
        let mut state = facility(1, 1, 2, 1);
        assert_eq!(state.first_waitable(), Some(H1));
        state.enqueue(H1, customer(1)).unwrap();
        // Counter ids continue after the single human.
        assert_eq!(state.first_waitable(), Some(S2));
        state.enqueue(S2, customer(2)).unwrap();
        assert_eq!(state.first_waitable(), None);
    }

    #[test]
    fn first_waitable_without_counters() {
        let mut state = facility(1, 1, 0, 5);
        state.enqueue(H1, customer(1)).unwrap();
        assert_eq!(state.first_waitable(), None);
    }

    #[test]
    fn shortest_queue_picks_first_minimum() {
        let mut state = facility(2, 3, 0, 0);
        assert_eq!(state.shortest_queue(), Some(H1));
        state.enqueue(H1, customer(1)).unwrap();
        assert_eq!(state.shortest_queue(), Some(H2));
        state.enqueue(H2, customer(2)).unwrap();
        assert_eq!(state.shortest_queue(), Some(H1));
    }

    #[test]
    fn shortest_queue_tie_with_shared_line_goes_to_human() {
        let mut state = facility(1, 3, 1, 3);
        // Both empty: tie → human.
        assert_eq!(state.shortest_queue(), Some(H1));
        state.enqueue(H1, customer(1)).unwrap();
        // Shared line strictly shorter → counter.
        assert_eq!(state.shortest_queue(), Some(S2));
        state.enqueue(S2, customer(2)).unwrap();
        // 1 vs 1: tie → human again.
        assert_eq!(state.shortest_queue(), Some(H1));
    }

    #[test]
    fn shortest_queue_skips_full_queues() {
        let mut state = facility(2, 1, 1, 1);
        state.enqueue(H1, customer(1)).unwrap();
        state.enqueue(H2, customer(2)).unwrap();
        assert_eq!(state.shortest_queue(), Some(S3));
        state.enqueue(S3, customer(3)).unwrap();
        assert_eq!(state.shortest_queue(), None);
    }

    #[test]
    fn shortest_queue_uses_shared_line_when_human_queues_cannot_hold_anyone() {
        // Humans have zero capacity; the shared line is the only option.
        let state = facility(2, 0, 1, 2);
        assert_eq!(state.shortest_queue(), Some(S3));
    }

    #[test]
    fn shared_line_serves_any_counter() {
        let mut state = facility(0, 0, 2, 2);
        let s1 = ServerRef::SelfCheckout(ServerId(1));
        let s2 = ServerRef::SelfCheckout(ServerId(2));
        state.serve(s1, customer(1)).unwrap();
        state.serve(s2, customer(2)).unwrap();
        // Routed through the first counter's handle...
        state.enqueue(s1, customer(3)).unwrap();
        assert_eq!(state.queue_of(s2).unwrap().len(), 1);
        // ...but pulled by whichever counter finishes first.
        let next = state.finish_and_pull_next(s2).unwrap();
        assert_eq!(next.map(|c| c.id), Some(CustomerId(3)));
        assert!(state.shared_queue().is_empty());
    }

    #[test]
    fn rest_round_trip_through_state() {
        let mut state = SystemStateBuilder::new().humans(1, 2, 1.0).build();
        state.serve(H1, customer(1)).unwrap();
        state.enqueue(H1, customer(2)).unwrap();
        state.begin_rest(H1).unwrap();
        assert!(state.is_resting(H1).unwrap());
        assert_eq!(state.first_servable(), None);
        let next = state.end_rest_and_pull_next(H1).unwrap();
        assert_eq!(next.map(|c| c.id), Some(CustomerId(2)));
        assert!(!state.is_resting(H1).unwrap());
    }

    #[test]
    fn counters_cannot_rest() {
        let mut state = facility(0, 0, 1, 1);
        let s1 = ServerRef::SelfCheckout(ServerId(1));
        state.serve(s1, customer(1)).unwrap();
        assert_eq!(state.begin_rest(s1).unwrap_err(), ModelError::RestDisabled(s1));
        assert_eq!(state.end_rest_and_pull_next(s1).unwrap_err(), ModelError::NotResting(s1));
        assert!(!state.is_resting(s1).unwrap());
    }

    #[test]
    fn end_rest_requires_resting() {
        let mut state = SystemStateBuilder::new().humans(1, 1, 0.5).build();
        assert_eq!(state.end_rest_and_pull_next(H1).unwrap_err(), ModelError::NotResting(H1));
    }

    #[test]
    fn builder_from_config() {
        let config = qs_core::SimConfig {
            human_servers:          2,
            self_checkouts:         3,
            queue_capacity:         4,
            self_checkout_capacity: Some(6),
            rest_probability:       0.25,
            ..qs_core::SimConfig::default()
        };
        let state = SystemStateBuilder::from_config(&config).build();
        assert_eq!(state.server_count(), 5);
        assert_eq!(state.humans()[1].queue().capacity(), 4);
        assert_eq!(state.humans()[0].rest_threshold(), 0.25);
        assert_eq!(state.shared_queue().capacity(), 6);
        assert_eq!(state.self_checkouts()[2].id, ServerId(5));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use crate::Statistics;

    #[test]
    fn empty_average_is_zero() {
        let stats = Statistics::new();
        assert_eq!(stats.average_wait(), 0.0);
        assert_eq!(stats.to_string(), "[0.000 0 0]");
    }

    #[test]
    fn average_over_served_only() {
        let mut stats = Statistics::new();
        stats.record_served(1.0);
        stats.record_served(2.0);
        stats.record_left();
        assert_eq!(stats.average_wait(), 1.5);
        assert_eq!(stats.resolved(), 3);
        assert_eq!(stats.to_string(), "[1.500 2 1]");
    }
}
