//! Agent storage: `AgentRegistry` (agent records) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The heading phase needs `&mut AgentRng` for each agent awaiting a new
//! heading and `&Agent` (shared read access) at the same time.  Keeping
//! RNGs outside the registry lets both borrows coexist:
//!
//! ```ignore
//! let registry: &AgentRegistry = &sim.registry;
//! for (id, rng) in sim.rngs.select_mut(&awaiting) {
//!     let agent = registry.get(id).unwrap();
//!     strategy.select(&request_for(agent), rng);
//! }
//! ```

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use jamnav_core::{AgentId, AgentRng};

use crate::{Agent, AgentError, AgentResult};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, indexed by `AgentId`.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Disjoint mutable references for a strictly ascending list of agents.
    ///
    /// Ids that are out of range or out of order are skipped.
    pub fn select_mut(&mut self, agents: &[AgentId]) -> Vec<(AgentId, &mut AgentRng)> {
        let mut wanted = agents.iter().copied().peekable();
        let mut out = Vec::with_capacity(agents.len());
        for (i, rng) in self.inner.iter_mut().enumerate() {
            let Some(&next) = wanted.peek() else { break };
            if next.index() == i {
                out.push((next, rng));
                wanted.next();
            }
        }
        out
    }
}

// ── AgentRegistry ─────────────────────────────────────────────────────────────

/// Every agent in the run, addressable by slot (`AgentId`) or by name.
///
/// Agents are never removed; slots are dense and iteration order is
/// registration order.
#[derive(Default)]
pub struct AgentRegistry {
    agents:  Vec<Agent>,
    by_name: HashMap<String, AgentId>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent`, rejecting a taken name or a non-finite start or goal.
    pub fn insert(&mut self, agent: Agent) -> AgentResult<AgentId> {
        if self.by_name.contains_key(&agent.name) {
            return Err(AgentError::DuplicateName(agent.name));
        }
        if !agent.position.is_finite() {
            return Err(AgentError::InvalidStart {
                name:     agent.name,
                position: agent.position,
            });
        }
        if let Some(goal) = agent.goal.filter(|g| !g.is_finite()) {
            return Err(AgentError::InvalidGoal { name: agent.name, goal });
        }
        let id = AgentId(self.agents.len() as u32);
        self.by_name.insert(agent.name.clone(), id);
        self.agents.push(agent);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.index())
    }

    /// Resolve a public agent name to its slot.
    pub fn lookup(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&Agent> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    /// Iterator over all `AgentId`s in ascending slot order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut Agent)> {
        self.agents
            .iter_mut()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    /// All agents as a slice, indexed by `AgentId`.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }
}
