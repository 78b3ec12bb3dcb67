//! Unit tests for jamnav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ZoneId::default(), ZoneId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ZoneId(0).to_string(), "ZoneId(0)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{FieldBounds, JamError, Position, round3};

    #[test]
    fn rounding_to_three_places() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), 0.0);
        assert_eq!(Position::new(1.0001, -2.9996).rounded(), Position::new(1.0, -3.0));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn square_field_diagonal() {
        let field = FieldBounds::square(10.0);
        assert!((field.diagonal() - 28.284_271).abs() < 1e-5);
        assert!(field.is_valid());
        assert_eq!(field.center(), Position::new(0.0, 0.0));
    }

    #[test]
    fn clamp_is_per_axis() {
        let field = FieldBounds::square(10.0);
        assert_eq!(field.clamp(Position::new(12.0, -3.0)), Position::new(10.0, -3.0));
        assert_eq!(field.clamp(Position::new(-11.0, -11.0)), Position::new(-10.0, -10.0));
        assert!(field.contains(Position::new(10.0, 10.0)));
        assert!(!field.contains(Position::new(10.001, 0.0)));
    }

    #[test]
    fn degenerate_field_is_invalid() {
        assert!(!FieldBounds::new(0.0, 0.0, -1.0, 1.0).is_valid());
        assert!(!FieldBounds::new(0.0, f64::NAN, -1.0, 1.0).is_valid());
    }

    #[test]
    fn validate_reports_the_offending_value() {
        let bad = FieldBounds::new(1.0, 1.0, 0.0, 1.0);
        assert_eq!(bad.validate(), Err(JamError::InvalidField(bad)));
        assert_eq!(FieldBounds::square(3.0).validate(), Ok(()));

        let p = Position::new(f64::INFINITY, 0.0);
        assert_eq!(p.validate(), Err(JamError::NonFinitePosition(p)));
        assert!(Position::new(1.0, 2.0).validate().is_ok());
    }
}

#[cfg(test)]
mod step {
    use crate::{FieldBounds, Position, clamp_to_step, discretize_path, max_step};

    #[test]
    fn max_step_is_diagonal_over_twenty() {
        let step = max_step(&FieldBounds::square(10.0));
        assert!((step - 1.414_213).abs() < 1e-5, "got {step}");
    }

    #[test]
    fn reachable_target_returned_unchanged() {
        let cur = Position::new(0.0, 0.0);
        let target = Position::new(0.123_456, 0.5);
        assert_eq!(clamp_to_step(cur, target, 1.0), target);
    }

    #[test]
    fn zero_distance_returns_target() {
        let p = Position::new(2.5, -1.0);
        assert_eq!(clamp_to_step(p, p, 1.0), p);
    }

    #[test]
    fn far_target_clamped_and_rounded() {
        let next = clamp_to_step(Position::new(0.0, 0.0), Position::new(10.0, 0.0), 1.5);
        assert_eq!(next, Position::new(1.5, 0.0));

        let diag = clamp_to_step(Position::new(0.0, 0.0), Position::new(3.0, 3.0), 1.0);
        assert_eq!(diag, Position::new(0.707, 0.707));
    }

    #[test]
    fn same_start_and_end_single_waypoint() {
        let p = Position::new(1.0, 1.0);
        assert_eq!(discretize_path(p, p, 1.0), vec![p]);
    }

    #[test]
    fn path_ends_exactly_at_end() {
        let start = Position::new(-8.0, -8.0);
        let end = Position::new(10.0, 10.0);
        let path = discretize_path(start, end, max_step(&FieldBounds::square(10.0)));
        assert_eq!(*path.last().unwrap(), end);
        assert_eq!(path[0], Position::new(-7.0, -7.0));
        assert_eq!(path.len(), 18);
    }

    #[test]
    fn path_agrees_with_repeated_clamp() {
        let start = Position::new(1.0, -4.0);
        let end = Position::new(-3.3, 7.25);
        let step = 0.9;
        let path = discretize_path(start, end, step);

        let mut cur = start;
        for wp in &path {
            cur = clamp_to_step(cur, end, step);
            assert_eq!(cur, *wp);
        }
    }

    #[test]
    fn long_path_grows_past_initial_reservation() {
        let end = Position::new(5_000.0, 0.0);
        let path = discretize_path(Position::new(0.0, 0.0), end, 1.0);
        assert_eq!(path.len(), 5_000);
        assert_eq!(path.last(), Some(&end));
    }

    #[test]
    fn non_positive_step_yields_endpoint() {
        let end = Position::new(5.0, 5.0);
        assert_eq!(discretize_path(Position::new(0.0, 0.0), end, 0.0), vec![end]);
        assert_eq!(discretize_path(Position::new(0.0, 0.0), end, f64::NAN), vec![end]);
    }
}

#[cfg(test)]
mod step_properties {
    use proptest::prelude::*;

    use crate::{Position, clamp_to_step, discretize_path};

    // Rounding to 3 decimals can lengthen a step by at most ~0.0008.
    const EPS: f64 = 1e-3;

    fn arb_position() -> impl Strategy<Value = Position> {
        (-100.0f64..100.0, -100.0f64..100.0).prop_map(|(x, y)| Position::new(x, y))
    }

    proptest! {
        #[test]
        fn clamp_respects_step_bound(
            cur in arb_position(),
            target in arb_position(),
            step in 0.01f64..20.0,
        ) {
            let next = clamp_to_step(cur, target, step);
            prop_assert!(cur.distance(next) <= step + EPS);
        }

        #[test]
        fn path_terminates_at_end_with_bounded_gaps(
            start in arb_position(),
            end in arb_position(),
            step in 0.5f64..20.0,
        ) {
            let path = discretize_path(start, end, step);
            prop_assert_eq!(*path.last().unwrap(), end);

            let mut prev = start;
            for wp in &path {
                prop_assert!(prev.distance(*wp) <= step + EPS);
                prev = *wp;
            }
        }
    }
}

#[cfg(test)]
mod comm_and_phase {
    use crate::{CommQuality, RecoveryPhase};

    #[test]
    fn quality_is_function_of_jammed() {
        assert_eq!(CommQuality::for_jammed(false), CommQuality::HIGH);
        assert_eq!(CommQuality::for_jammed(true), CommQuality::LOW);
        assert!(CommQuality::is_high(CommQuality::HIGH));
        assert!(!CommQuality::is_high(CommQuality::LOW));
    }

    #[test]
    fn phase_labels() {
        assert_eq!(RecoveryPhase::default(), RecoveryPhase::None);
        assert!(!RecoveryPhase::None.is_recovering());
        assert!(RecoveryPhase::ReturningToSafe.is_recovering());
        assert_eq!(RecoveryPhase::AwaitingNewHeading.to_string(), "awaiting_new_heading");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).next(), Tick(4));
    }

    #[test]
    fn clock_timestamps() {
        let mut clock = SimClock::new(1_000, 2);
        assert_eq!(clock.current_unix_secs(), 1_000);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_unix_secs(), 1_004);
        assert_eq!(clock.unix_secs_at(Tick(10)), 1_020);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 200, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(200));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.heading_angle(), r2.heading_angle());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.heading_angle(), r1.heading_angle());
    }

    #[test]
    fn unit_direction_has_unit_length() {
        let mut rng = AgentRng::new(0, AgentId(3));
        for _ in 0..100 {
            let (dx, dy) = rng.unit_direction();
            assert!((dx.hypot(dy) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sim_rng_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            let v = rng.gen_range(-10.0f64..=10.0);
            assert!((-10.0..=10.0).contains(&v));
        }
    }
}
