//! Declarative scenario description and the one-call constructor.
//!
//! With the `serde` feature a scenario loads from JSON:
//!
//! ```json
//! {
//!   "sim":         { "total_ticks": 200, "seed": 7 },
//!   "field":       { "x_min": -10, "x_max": 10, "y_min": -10, "y_max": 10 },
//!   "zones":       [ { "center": { "x": 0, "y": 0 }, "radius": 5 } ],
//!   "mission_end": { "x": 10, "y": 10 },
//!   "agents":      { "kind": "random", "count": 5, "min_separation": 1.0 },
//!   "strategy":    { "kind": "scripted", "attempts": 10 }
//! }
//! ```

use std::sync::Arc;

use jamnav_agent::{DEFAULT_HISTORY_CAPACITY, RegistryBuilder};
use jamnav_core::{FieldBounds, Position, SimConfig};
use jamnav_heading::{HeadingStrategy, LlmClient, StrategyConfig, build_strategy};
use jamnav_zone::JammingZone;

use crate::{Sim, SimBuilder, SimError, SimResult};

/// One explicitly placed agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStart {
    pub id:    String,
    pub start: Position,
    /// Overrides the mission end for this agent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal:  Option<Position>,
}

/// How the swarm is populated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum AgentsConfig {
    Explicit { agents: Vec<AgentStart> },
    Random { count: usize, min_separation: f64 },
}

impl Default for AgentsConfig {
    fn default() -> Self {
        AgentsConfig::Random { count: 5, min_separation: 1.0 }
    }
}

/// Everything needed to build a [`Sim`] without code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    pub sim:              SimConfig,
    pub field:            FieldBounds,
    pub zones:            Vec<JammingZone>,
    pub mission_end:      Position,
    pub agents:           AgentsConfig,
    pub strategy:         StrategyConfig,
    pub history_capacity: usize,
}

impl Default for ScenarioConfig {
    /// The reference corridor: a 20×20 field, one zone of radius 5 at the
    /// origin, mission end in the far corner.
    fn default() -> Self {
        Self {
            sim:              SimConfig::default(),
            field:            FieldBounds::square(10.0),
            zones:            vec![JammingZone { center: Position::new(0.0, 0.0), radius: 5.0 }],
            mission_end:      Position::new(10.0, 10.0),
            agents:           AgentsConfig::default(),
            strategy:         StrategyConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl ScenarioConfig {
    /// Build the registry, the strategy, and the [`Sim`].
    ///
    /// `client` is required only for an LLM strategy.
    pub fn build(
        &self,
        client: Option<Arc<dyn LlmClient>>,
    ) -> SimResult<Sim<Box<dyn HeadingStrategy>>> {
        if self.history_capacity == 0 {
            return Err(SimError::Config("history_capacity must be at least 1".into()));
        }
        let mut registry = RegistryBuilder::new(self.sim.seed).history_capacity(self.history_capacity);
        registry = match &self.agents {
            AgentsConfig::Explicit { agents } => agents.iter().fold(registry, |b, a| match a.goal {
                Some(goal) => b.agent_with_goal(a.id.clone(), a.start, goal),
                None => b.agent(a.id.clone(), a.start),
            }),
            AgentsConfig::Random { count, min_separation } => {
                registry.random_agents(*count, self.field, *min_separation)
            }
        };
        let (agents, rngs) = registry.build()?;
        let strategy = build_strategy(&self.strategy, client)?;

        SimBuilder::new(self.sim.clone(), self.field, agents, rngs, strategy)
            .zones(self.zones.clone())
            .mission_end(self.mission_end)
            .build()
    }
}
