//! Unit tests for qs-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CustomerId, ServerId};

    #[test]
    fn index_roundtrip() {
        let id = CustomerId::from_index(41);
        assert_eq!(id, CustomerId(42));
        assert_eq!(id.index(), 41);
    }

    #[test]
    fn ordering() {
        assert!(CustomerId(1) < CustomerId(2));
        assert!(ServerId(10) > ServerId(9));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(CustomerId(7).to_string(), "7");
        assert_eq!(ServerId(3).to_string(), "3");
    }
}

#[cfg(test)]
mod time {
    use crate::SimTime;

    #[test]
    fn arithmetic() {
        let t = SimTime(1.5);
        assert_eq!(t + 2.0, SimTime(3.5));
        assert_eq!(t.after(0.5), SimTime(2.0));
        assert_eq!(SimTime(4.0) - SimTime(1.0), 3.0);
    }

    #[test]
    fn total_order() {
        let mut times = vec![SimTime(2.0), SimTime(0.0), SimTime(1.25)];
        times.sort();
        assert_eq!(times, vec![SimTime(0.0), SimTime(1.25), SimTime(2.0)]);
        assert!(SimTime::ZERO < SimTime(f64::MIN_POSITIVE));
    }

    #[test]
    fn display_three_decimals() {
        assert_eq!(SimTime(0.0).to_string(), "0.000");
        assert_eq!(SimTime(2.0).to_string(), "2.000");
        assert_eq!(SimTime(1.23456).to_string(), "1.235");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn from_tokens_parses_in_order() {
        let cfg = SimConfig::from_tokens("1 2 3 4 5\n1.0 1.5 0.5 0.25 0.75").unwrap();
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.human_servers, 2);
        assert_eq!(cfg.self_checkouts, 3);
        assert_eq!(cfg.queue_capacity, 4);
        assert_eq!(cfg.customers, 5);
        assert_eq!(cfg.arrival_rate, 1.0);
        assert_eq!(cfg.service_rate, 1.5);
        assert_eq!(cfg.rest_rate, 0.5);
        assert_eq!(cfg.rest_probability, 0.25);
        assert_eq!(cfg.greedy_probability, 0.75);
        assert_eq!(cfg.shared_capacity(), 4);
    }

    #[test]
    fn from_tokens_missing_value() {
        let err = SimConfig::from_tokens("1 2 3").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn from_tokens_bad_number() {
        let err = SimConfig::from_tokens("1 2 x 4 5 1 1 1 0 0").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn zero_service_rate_rejected() {
        let cfg = SimConfig { service_rate: 0.0, ..SimConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidRate { what: "service_rate", .. })
        ));
    }

    #[test]
    fn rest_rate_only_checked_when_resting() {
        let cfg = SimConfig { rest_rate: 0.0, rest_probability: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_ok());

        let cfg = SimConfig { rest_rate: 0.0, rest_probability: 0.5, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_rejected() {
        let cfg = SimConfig { greedy_probability: 1.5, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = SimConfig { rest_probability: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn separate_shared_capacity() {
        let cfg = SimConfig { self_checkout_capacity: Some(7), ..SimConfig::default() };
        assert_eq!(cfg.shared_capacity(), 7);
    }
}

#[cfg(test)]
mod rng {
    use crate::{DrawKind, RandomSource, ScriptedRandom, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345, 1.0, 1.0, 0.1).unwrap();
        let mut r2 = SimRng::new(12345, 1.0, 1.0, 0.1).unwrap();
        for _ in 0..100 {
            assert_eq!(r1.inter_arrival(), r2.inter_arrival());
            assert_eq!(r1.service_time(), r2.service_time());
            assert_eq!(r1.rest_sample(), r2.rest_sample());
        }
    }

    #[test]
    fn streams_are_independent() {
        // Interleaving other draws must not change the service sequence.
        let mut plain = SimRng::new(7, 1.0, 2.0, 0.5).unwrap();
        let mut busy = SimRng::new(7, 1.0, 2.0, 0.5).unwrap();
        for _ in 0..20 {
            busy.rest_sample();
            busy.inter_arrival();
            busy.customer_type_sample();
            assert_eq!(plain.service_time(), busy.service_time());
        }
    }

    #[test]
    fn samples_in_unit_interval_and_durations_non_negative() {
        let mut rng = SimRng::new(0, 3.0, 0.5, 2.0).unwrap();
        for _ in 0..1000 {
            let s = rng.rest_sample();
            assert!((0.0..1.0).contains(&s));
            let c = rng.customer_type_sample();
            assert!((0.0..1.0).contains(&c));
            assert!(rng.inter_arrival() >= 0.0);
            assert!(rng.service_time() >= 0.0);
            assert!(rng.rest_period() >= 0.0);
        }
    }

    #[test]
    fn disabled_rest_rate_yields_zero_period() {
        let mut rng = SimRng::new(0, 1.0, 1.0, 0.0).unwrap();
        assert_eq!(rng.rest_period(), 0.0);
    }

    #[test]
    fn negative_rate_rejected() {
        assert!(SimRng::new(0, -1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn scripted_defaults_never_rest_never_greedy() {
        let mut rng = ScriptedRandom::new();
        assert_eq!(rng.rest_sample(), 1.0);
        assert_eq!(rng.customer_type_sample(), 1.0);
        assert_eq!(rng.service_time(), 1.0);
    }

    #[test]
    fn scripted_sequence_then_fallback() {
        let mut rng = ScriptedRandom::new()
            .sequence(DrawKind::RestPeriod, [3.0])
            .constant(DrawKind::RestPeriod, 9.0);
        assert_eq!(rng.rest_period(), 3.0);
        assert_eq!(rng.rest_period(), 9.0);
        assert_eq!(rng.draws(DrawKind::RestPeriod), 2);
        for kind in DrawKind::ALL {
            if kind != DrawKind::RestPeriod {
                assert_eq!(rng.draws(kind), 0);
            }
        }
    }
}
