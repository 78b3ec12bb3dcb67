//! Fluent builder for constructing `AgentRegistry` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use jamnav_agent::RegistryBuilder;
//! use jamnav_core::{FieldBounds, Position};
//!
//! let (registry, rngs) = RegistryBuilder::new(/*seed=*/ 42)
//!     .agent("scout", Position::new(-8.0, -8.0))
//!     .random_agents(4, FieldBounds::square(10.0), 1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.len(), 5);
//! assert_eq!(rngs.len(), 5);
//! ```

use jamnav_core::{FieldBounds, Position, SimRng};

use crate::agent::DEFAULT_HISTORY_CAPACITY;
use crate::{Agent, AgentError, AgentRegistry, AgentResult, AgentRngs};

/// Placement attempts per randomly spawned agent before giving up.
const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

struct RandomSpawn {
    count:          usize,
    field:          FieldBounds,
    min_separation: f64,
}

/// Fluent builder for [`AgentRegistry`] + [`AgentRngs`].
///
/// Explicit agents are registered first, in call order; randomly spawned
/// agents follow and are named `agent_<n>`.
pub struct RegistryBuilder {
    seed:             u64,
    history_capacity: usize,
    explicit:         Vec<(String, Position, Option<Position>)>,
    random:           Option<RandomSpawn>,
}

impl RegistryBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            explicit:         Vec::new(),
            random:           None,
        }
    }

    /// Number of history samples retained per agent.
    pub fn history_capacity(mut self, n: usize) -> Self {
        self.history_capacity = n;
        self
    }

    /// Add an agent with a fixed start.
    pub fn agent(mut self, name: impl Into<String>, start: Position) -> Self {
        self.explicit.push((name.into(), start, None));
        self
    }

    /// Add an agent with a fixed start and its own travel goal.
    pub fn agent_with_goal(mut self, name: impl Into<String>, start: Position, goal: Position) -> Self {
        self.explicit.push((name.into(), start, Some(goal)));
        self
    }

    /// Spawn `count` agents uniformly in `field`, each at least
    /// `min_separation` from every other agent (explicit ones included).
    pub fn random_agents(mut self, count: usize, field: FieldBounds, min_separation: f64) -> Self {
        self.random = Some(RandomSpawn { count, field, min_separation });
        self
    }

    pub fn build(self) -> AgentResult<(AgentRegistry, AgentRngs)> {
        let mut registry = AgentRegistry::new();
        for (name, start, goal) in self.explicit {
            let mut agent = Agent::new(name, start, self.history_capacity);
            agent.goal = goal;
            registry.insert(agent)?;
        }

        if let Some(spawn) = self.random {
            let starts = place_random(&spawn, &registry, self.seed)?;
            let offset = registry.len();
            for (i, start) in starts.into_iter().enumerate() {
                let name = format!("agent_{}", offset + i);
                registry.insert(Agent::new(name, start, self.history_capacity))?;
            }
        }

        let rngs = AgentRngs::new(registry.len(), self.seed);
        Ok((registry, rngs))
    }
}

/// Rejection-sample collision-free starts.
fn place_random(spawn: &RandomSpawn, existing: &AgentRegistry, seed: u64) -> AgentResult<Vec<Position>> {
    let field = spawn.field;
    field.validate()?;

    let mut rng = SimRng::new(seed);
    let mut taken: Vec<Position> = existing.agents().iter().map(|a| a.position).collect();
    let mut placed = Vec::with_capacity(spawn.count);

    for _ in 0..spawn.count {
        let candidate = (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
            let p = Position::new(
                rng.gen_range(field.x_min..=field.x_max),
                rng.gen_range(field.y_min..=field.y_max),
            )
            .rounded();
            taken
                .iter()
                .all(|q| q.distance(p) >= spawn.min_separation)
                .then_some(p)
        });

        match candidate {
            Some(p) => {
                taken.push(p);
                placed.push(p);
            }
            None => {
                return Err(AgentError::Placement {
                    placed:         placed.len(),
                    requested:      spawn.count,
                    field,
                    min_separation: spawn.min_separation,
                });
            }
        }
    }
    Ok(placed)
}
