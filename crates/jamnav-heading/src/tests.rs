//! Unit tests for jamnav-heading.

use jamnav_agent::Agent;
use jamnav_core::{AgentId, AgentRng, FieldBounds, Position, Tick, max_step};
use jamnav_zone::{JammingZone, ZoneSet};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-3;

fn field() -> FieldBounds {
    FieldBounds::square(10.0)
}

fn zones(list: &[((f64, f64), f64)]) -> ZoneSet {
    let zones = list
        .iter()
        .map(|&(c, r)| JammingZone::new(c.into(), r).unwrap())
        .collect();
    ZoneSet::new(zones).unwrap()
}

fn agent_at(x: f64, y: f64) -> Agent {
    Agent::new("scout-1", Position::new(x, y), 16)
}

fn rng() -> AgentRng {
    AgentRng::new(7, AgentId(0))
}

// ── Scripted ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scripted {
    use super::*;
    use crate::{HeadingRequest, HeadingStrategy, ScriptedHeading};

    #[test]
    fn picks_clear_point_within_one_step() {
        let zs = zones(&[((0.0, 0.0), 5.0)]);
        let agent = agent_at(-4.0, -4.0);
        let step = max_step(&field());
        let req = HeadingRequest::new(&agent, field(), &zs, step);
        let mut rng = rng();

        for _ in 0..50 {
            let p = ScriptedHeading::default().select(&req, &mut rng);
            assert!(p.distance(agent.position) <= step + EPS);
            assert!(field().contains(p));
        }
    }

    #[test]
    fn clear_field_always_yields_clear_point() {
        let zs = ZoneSet::empty();
        let agent = agent_at(0.0, 0.0);
        let req = HeadingRequest::new(&agent, field(), &zs, max_step(&field()));
        let p = ScriptedHeading::new(1).select(&req, &mut rng());
        assert!(!zs.is_jammed(p));
    }

    #[test]
    fn escapes_away_from_nearest_centre_when_all_jammed() {
        // The zone covers the whole field, so every random heading is jammed.
        let zs = zones(&[((0.0, 0.0), 100.0)]);
        let agent = agent_at(1.0, 0.0);
        let step = max_step(&field());
        let req = HeadingRequest::new(&agent, field(), &zs, step);

        let p = ScriptedHeading::new(3).select(&req, &mut rng());
        assert!((p.x - (1.0 + step)).abs() < EPS, "{p}");
        assert!(p.y.abs() < EPS, "{p}");
    }

    #[test]
    fn escape_from_exact_centre_uses_random_direction() {
        let zs = zones(&[((0.0, 0.0), 100.0)]);
        let agent = agent_at(0.0, 0.0);
        let step = max_step(&field());
        let req = HeadingRequest::new(&agent, field(), &zs, step);

        let p = ScriptedHeading::new(2).select(&req, &mut rng());
        assert!((p.distance(agent.position) - step).abs() < EPS);
    }

    #[test]
    fn result_is_clamped_to_field() {
        let zs = zones(&[((0.0, 0.0), 100.0)]);
        let agent = agent_at(9.9, 0.0);
        let req = HeadingRequest::new(&agent, field(), &zs, max_step(&field()));

        let p = ScriptedHeading::new(1).select(&req, &mut rng());
        assert!(field().contains(p));
        assert_eq!(p.x, 10.0);
    }

    #[test]
    fn same_seed_same_heading() {
        let zs = zones(&[((0.0, 0.0), 5.0)]);
        let agent = agent_at(-4.0, -4.0);
        let req = HeadingRequest::new(&agent, field(), &zs, max_step(&field()));
        let a = ScriptedHeading::default().select(&req, &mut rng());
        let b = ScriptedHeading::default().select(&req, &mut rng());
        assert_eq!(a, b);
    }
}

// ── Response parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use jamnav_core::Position;

    use crate::{ResponseParser, parse_coordinate};

    fn named(text: &str) -> Option<(Position, &'static str)> {
        ResponseParser::default().parse_with_name(text)
    }

    #[test]
    fn matcher_order() {
        let names: Vec<_> = ResponseParser::default().matchers().iter().map(|m| m.name).collect();
        assert_eq!(names, ["parenthesized", "labeled", "bare_pair", "split_lines"]);
    }

    #[test]
    fn parenthesized_pair() {
        assert_eq!(
            named("Move to (3.5, -2) next."),
            Some((Position::new(3.5, -2.0), "parenthesized"))
        );
    }

    #[test]
    fn labeled_pair() {
        assert_eq!(
            named("X = 1.5; y: -2.25"),
            Some((Position::new(1.5, -2.25), "labeled"))
        );
    }

    #[test]
    fn bare_pair() {
        assert_eq!(named("go 4 5"), Some((Position::new(4.0, 5.0), "bare_pair")));
        assert_eq!(named("-1.5,2"), Some((Position::new(-1.5, 2.0), "bare_pair")));
    }

    #[test]
    fn numbers_on_separate_lines() {
        assert_eq!(
            named("1.25\n-3.5"),
            Some((Position::new(1.25, -3.5), "split_lines"))
        );
    }

    #[test]
    fn earlier_matcher_wins() {
        let (p, name) = named("x=9, y=9 or maybe (1, 2)").unwrap();
        assert_eq!(name, "parenthesized");
        assert_eq!(p, Position::new(1.0, 2.0));
    }

    #[test]
    fn non_finite_match_is_skipped() {
        assert_eq!(parse_coordinate("(1e999, 2) then (3, 4)"), Some(Position::new(3.0, 4.0)));
    }

    #[test]
    fn nothing_to_parse() {
        assert_eq!(parse_coordinate("I cannot help with that."), None);
        assert_eq!(parse_coordinate(""), None);
    }
}

// ── LLM strategy ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod llm {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use super::*;
    use crate::{
        AttemptError, DeadlineClient, HeadingRequest, HeadingStrategy, LlmClient, LlmConfig,
        LlmError, LlmHeading, build_prompt,
    };

    /// Replays canned replies and counts calls.
    #[derive(Default)]
    struct Canned {
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
        calls:   Mutex<u32>,
    }

    impl Canned {
        fn new(replies: Vec<Result<&str, LlmError>>) -> Self {
            let replies = replies.into_iter().map(|r| r.map(str::to_owned)).collect();
            Self { replies: Mutex::new(replies), calls: Mutex::new(0) }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl LlmClient for Canned {
        fn send(&self, _prompt: &str) -> Result<String, LlmError> {
            *self.calls.lock().unwrap() += 1;
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("no idea".into()))
        }
    }

    struct Slow(Duration);

    impl LlmClient for Slow {
        fn send(&self, _prompt: &str) -> Result<String, LlmError> {
            std::thread::sleep(self.0);
            Ok("(0, 0)".into())
        }
    }

    fn select_with(client: Arc<Canned>, agent: &Agent, zs: &ZoneSet) -> Position {
        let heading = LlmHeading::new(client, LlmConfig::default());
        let req = HeadingRequest::new(agent, field(), zs, max_step(&field()));
        heading.select(&req, &mut rng())
    }

    #[test]
    fn accepts_first_good_reply() {
        let client = Arc::new(Canned::new(vec![Ok("(1.0, 0.5)")]));
        let p = select_with(client.clone(), &agent_at(0.0, 0.0), &ZoneSet::empty());
        assert_eq!(p, Position::new(1.0, 0.5));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn far_suggestion_is_clamped_to_one_step() {
        let client = Arc::new(Canned::new(vec![Ok("(10, 0)")]));
        let p = select_with(client, &agent_at(0.0, 0.0), &ZoneSet::empty());
        let step = max_step(&field());
        assert!((p.x - step).abs() < EPS);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn too_long_reply_is_retried() {
        let long = "x".repeat(200);
        let client = Arc::new(Canned::new(vec![Ok(long.as_str()), Ok("(0.5, 0.5)")]));
        let p = select_with(client.clone(), &agent_at(0.0, 0.0), &ZoneSet::empty());
        assert_eq!(p, Position::new(0.5, 0.5));
        assert_eq!(client.calls(), 2);
    }

    #[test]
    fn attempt_reports_error_kind() {
        let long = "(1, 1)".repeat(20);
        let client = Canned::new(vec![
            Ok(long.as_str()),
            Ok("nothing useful"),
            Err(LlmError::Transport("connection reset".into())),
        ]);
        let heading = LlmHeading::new(client, LlmConfig::default());

        assert_eq!(heading.attempt("p"), Err(AttemptError::TooLong { len: 120, max: 60 }));
        assert_eq!(heading.attempt("p"), Err(AttemptError::Unparseable));
        assert_eq!(
            heading.attempt("p"),
            Err(AttemptError::Transport(LlmError::Transport("connection reset".into())))
        );
    }

    #[test]
    fn padding_counts_toward_budget() {
        let padded = format!("(1, 1){}", " ".repeat(60));
        let client = Canned::new(vec![Ok(padded.as_str()), Ok("  (1, 1)  ")]);
        let heading = LlmHeading::new(client, LlmConfig::default());

        assert_eq!(heading.attempt("p"), Err(AttemptError::TooLong { len: 66, max: 60 }));
        assert_eq!(heading.attempt("p"), Ok(Position::new(1.0, 1.0)));
    }

    #[test]
    fn transport_errors_count_against_budget_then_fall_back() {
        let err = || Err(LlmError::Transport("down".into()));
        let client = Arc::new(Canned::new(vec![err(), err(), err(), Ok("(0.1, 0.1)")]));
        let zs = zones(&[((0.0, 0.0), 5.0)]);
        let agent = agent_at(-4.0, -4.0);
        let p = select_with(client.clone(), &agent, &zs);

        assert_eq!(client.calls(), 3, "fourth reply must not be requested");
        assert!(p.distance(agent.position) <= max_step(&field()) + EPS);
        assert!(field().contains(p));
    }

    #[test]
    fn always_unparseable_falls_back_to_valid_coordinate() {
        let client = Arc::new(Canned::default());
        let agent = agent_at(3.0, 3.0);
        let p = select_with(client.clone(), &agent, &ZoneSet::empty());
        assert_eq!(client.calls(), 3);
        assert!(p.is_finite());
        assert!(p.distance(agent.position) <= max_step(&field()) + EPS);
    }

    #[test]
    fn prompt_carries_agent_and_history() {
        let mut agent = agent_at(-5.0, -5.0);
        for t in 0..8 {
            agent.position = Position::new(-5.0 + t as f64 * 0.1, -5.0);
            agent.record(Tick(t));
        }
        let zs = ZoneSet::empty();
        let req = HeadingRequest::new(&agent, field(), &zs, max_step(&field()));
        let prompt = build_prompt(&req, 3, 60);

        assert!(prompt.contains("scout-1"));
        assert!(prompt.contains("tick 7"));
        assert!(prompt.contains("tick 5"));
        assert!(!prompt.contains("tick 4:"));
        assert!(prompt.contains("(x, y)"));
        assert!(prompt.contains("60 characters"));
    }

    #[test]
    fn deadline_client_times_out() {
        let slow = DeadlineClient::new(Arc::new(Slow(Duration::from_millis(500))), Duration::from_millis(20));
        assert_eq!(slow.send("p"), Err(LlmError::Timeout(Duration::from_millis(20))));
    }

    #[test]
    fn deadline_client_passes_fast_reply() {
        let fast = DeadlineClient::new(Arc::new(Slow(Duration::ZERO)), Duration::from_secs(5));
        assert_eq!(fast.send("p"), Ok("(0, 0)".into()));
    }

    #[test]
    fn hung_requests_are_capped() {
        let client = DeadlineClient::new(Arc::new(Slow(Duration::from_secs(2))), Duration::from_millis(10))
            .with_max_in_flight(1);

        assert_eq!(client.send("p"), Err(LlmError::Timeout(Duration::from_millis(10))));
        assert_eq!(client.in_flight(), 1);
        assert_eq!(client.send("p"), Err(LlmError::Busy(1)));
        assert_eq!(client.in_flight(), 1);
    }

    #[test]
    fn finished_requests_release_their_slot() {
        let client = DeadlineClient::new(Arc::new(Slow(Duration::ZERO)), Duration::from_secs(5))
            .with_max_in_flight(1);
        for _ in 0..3 {
            assert_eq!(client.send("p"), Ok("(0, 0)".into()));
        }
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use std::sync::Arc;

    use crate::{
        HeadingError, HeadingStrategy, LlmClient, LlmConfig, LlmError, ScriptedConfig,
        StrategyConfig, build_strategy,
    };

    struct Echo;

    impl LlmClient for Echo {
        fn send(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok("(0, 0)".into())
        }
    }

    #[test]
    fn default_is_scripted() {
        let s = build_strategy(&StrategyConfig::default(), None).unwrap();
        assert_eq!(s.name(), "scripted");
    }

    #[test]
    fn llm_without_client_is_rejected() {
        let err = build_strategy(&StrategyConfig::Llm(LlmConfig::default()), None);
        assert!(matches!(err, Err(HeadingError::MissingClient)));
    }

    #[test]
    fn llm_with_timeout_builds() {
        let cfg = StrategyConfig::Llm(LlmConfig { timeout_ms: Some(100), ..LlmConfig::default() });
        let client: Arc<dyn LlmClient> = Arc::new(Echo);
        let s = build_strategy(&cfg, Some(client)).unwrap();
        assert_eq!(s.name(), "llm");
    }

    #[test]
    fn zero_in_flight_cap_rejected_with_timeout() {
        let cfg = StrategyConfig::Llm(LlmConfig {
            timeout_ms:    Some(100),
            max_in_flight: 0,
            ..LlmConfig::default()
        });
        let client: Arc<dyn LlmClient> = Arc::new(Echo);
        assert!(matches!(build_strategy(&cfg, Some(client)), Err(HeadingError::Config(_))));
    }

    #[test]
    fn zero_attempts_rejected() {
        let cfg = StrategyConfig::Scripted(ScriptedConfig { attempts: 0 });
        assert!(matches!(build_strategy(&cfg, None), Err(HeadingError::Config(_))));
    }
}
