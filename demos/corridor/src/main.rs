//! corridor: a small swarm crossing a field with a jamming zone in the middle.
//!
//! Agents travel from the south-west toward the mission end in the far
//! north-east corner.  A zone of radius 5 sits on the diagonal, so most of
//! them lose communication on the way, retreat, take a new heading, and
//! carry on.
//!
//! ```text
//! corridor [scenario.json] [--llm]
//! ```
//!
//! Without a scenario file the built-in corridor is used.  `--llm` swaps the
//! scripted heading strategy for the LLM one, backed by an offline canned
//! client.  Set `RUST_LOG=debug` to see every phase transition.

mod canned;
mod trace;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use jamnav_core::{Position, SimConfig};
use jamnav_heading::{HeadingStrategy, LlmClient, LlmConfig, StrategyConfig};
use jamnav_sim::{AgentStart, AgentsConfig, ScenarioConfig};

use canned::CannedLlm;
use trace::CsvTrace;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 120;
const OUTPUT_INTERVAL_TICKS: u64 = 10;
const OUTPUT_DIR:            &str = "output/corridor";

// ── Scenario ──────────────────────────────────────────────────────────────────

fn builtin_scenario() -> ScenarioConfig {
    let start = |id: &str, x: f64, y: f64| AgentStart {
        id:    id.to_owned(),
        start: Position::new(x, y),
        goal:  None,
    };
    ScenarioConfig {
        sim: SimConfig {
            start_unix_secs:       1_700_000_000,
            tick_duration_secs:    1,
            total_ticks:           TOTAL_TICKS,
            seed:                  SEED,
            output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        },
        agents: AgentsConfig::Explicit {
            agents: vec![
                start("scout", -8.0, -8.0),
                start("alpha", -9.0, -4.0),
                start("bravo", -4.0, -9.0),
                start("charlie", -6.0, -2.0),
                AgentStart {
                    id:    "delta".to_owned(),
                    start: Position::new(-2.0, -7.0),
                    goal:  Some(Position::new(9.0, -9.0)),
                },
            ],
        },
        ..ScenarioConfig::default()
    }
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing scenario {}", path.display()))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_llm = args.iter().any(|a| a == "--llm");
    let path = args.iter().find(|a| !a.starts_with("--"));

    // 1. Scenario.
    let mut scenario = match path {
        Some(p) => load_scenario(Path::new(p))?,
        None => builtin_scenario(),
    };
    let canned = Arc::new(CannedLlm::new());
    let client: Option<Arc<dyn LlmClient>> = if use_llm {
        if !matches!(scenario.strategy, StrategyConfig::Llm(_)) {
            scenario.strategy = StrategyConfig::Llm(LlmConfig {
                timeout_ms: Some(2_000),
                ..LlmConfig::default()
            });
        }
        Some(canned.clone())
    } else {
        None
    };

    println!("=== corridor: swarm navigation under jamming ===");
    println!(
        "Field: {}  |  Zones: {}  |  Ticks: {}  |  Seed: {}",
        scenario.field,
        scenario.zones.len(),
        scenario.sim.total_ticks,
        scenario.sim.seed,
    );
    println!();

    // 2. Build sim.
    let mut sim = scenario.build(client)?;
    println!(
        "Agents: {}  |  Strategy: {}  |  Max step: {:.3}",
        sim.agents.len(),
        sim.strategy.name(),
        sim.policy.max_step(),
    );

    // 3. Output.
    fs::create_dir_all(OUTPUT_DIR)?;
    let mut trace = CsvTrace::new(Path::new(OUTPUT_DIR), scenario.sim.make_clock())?;

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut trace)?;
    let elapsed = t0.elapsed();

    if let Some(e) = trace.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  trace.csv : {} rows ({} jammed)", trace.rows, trace.jammed_rows);
    if use_llm {
        println!("  LLM calls : {}", canned.calls());
    }
    println!();

    // 6. Final agent table.
    let end = sim.policy.mission_end();
    println!("{:<10} {:>9} {:>9} {:<8} {:<22} {:<8}", "Agent", "X", "Y", "Jammed", "Phase", "Arrived");
    println!("{}", "-".repeat(70));
    for (_, agent) in sim.agents.iter() {
        let arrived = agent.is_idle() && agent.position == agent.goal_or(end);
        println!(
            "{:<10} {:>9.3} {:>9.3} {:<8} {:<22} {:<8}",
            agent.name,
            agent.position.x,
            agent.position.y,
            if agent.jammed { "yes" } else { "no" },
            agent.recovery_phase.as_str(),
            if arrived { "yes" } else { "no" },
        );
    }

    Ok(())
}
