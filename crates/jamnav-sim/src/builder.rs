//! Fluent builder for constructing a [`Sim`].

use jamnav_agent::{AgentRegistry, AgentRngs};
use jamnav_core::{FieldBounds, Position, SimConfig, Tick, max_step};
use jamnav_heading::HeadingStrategy;
use jamnav_recovery::RecoveryPolicy;
use jamnav_zone::{JammingZone, ZoneSet};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<H>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, seed, tick duration, …
/// - [`FieldBounds`]: the playing field; fixes `max_step`
/// - [`AgentRegistry`] + [`AgentRngs`]: from [`jamnav_agent::RegistryBuilder`]
/// - `H: HeadingStrategy`: the re-heading policy
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                  |
/// |---------------------|--------------------------|
/// | `.zones(v)`         | No zones                 |
/// | `.zone(z)`          | (appends one zone)       |
/// | `.mission_end(p)`   | Centre of the field      |
///
/// # Example
///
/// ```rust,ignore
/// let (agents, rngs) = RegistryBuilder::new(seed).agent("scout", start).build()?;
/// let mut sim = SimBuilder::new(config, field, agents, rngs, ScriptedHeading::default())
///     .zone(JammingZone::new(Position::new(0.0, 0.0), 5.0)?)
///     .mission_end(Position::new(10.0, 10.0))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<H: HeadingStrategy> {
    config:      SimConfig,
    field:       FieldBounds,
    agents:      AgentRegistry,
    rngs:        AgentRngs,
    strategy:    H,
    zones:       Vec<JammingZone>,
    mission_end: Option<Position>,
}

impl<H: HeadingStrategy> SimBuilder<H> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   SimConfig,
        field:    FieldBounds,
        agents:   AgentRegistry,
        rngs:     AgentRngs,
        strategy: H,
    ) -> Self {
        Self {
            config,
            field,
            agents,
            rngs,
            strategy,
            zones:       Vec::new(),
            mission_end: None,
        }
    }

    /// Replace the zone list.
    pub fn zones(mut self, zones: Vec<JammingZone>) -> Self {
        self.zones = zones;
        self
    }

    pub fn zone(mut self, zone: JammingZone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Shared travel goal; agents with their own goal ignore it.
    pub fn mission_end(mut self, end: Position) -> Self {
        self.mission_end = Some(end);
        self
    }

    /// Validate inputs, place every agent, and return a ready-to-run [`Sim`].
    ///
    /// Placement sets each agent's jammed flag, records a clear start as
    /// its safe position, plans its path, and appends a tick-0 history
    /// sample.
    pub fn build(self) -> SimResult<Sim<H>> {
        // ── Validate ──────────────────────────────────────────────────────
        self.field.validate()?;
        if self.rngs.len() != self.agents.len() {
            return Err(SimError::AgentCountMismatch {
                expected: self.agents.len(),
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }
        if let Some((_, agent)) = self.agents.iter().find(|(_, a)| !self.field.contains(a.position)) {
            return Err(SimError::StartOutsideField {
                name:     agent.name.clone(),
                position: agent.position,
            });
        }

        let mission_end = self.mission_end.unwrap_or_else(|| self.field.center());
        if !self.field.contains(mission_end) {
            return Err(SimError::MissionEndOutsideField(mission_end));
        }
        let stray_goal = self.agents.iter().find_map(|(_, a)| {
            a.goal.filter(|g| !self.field.contains(*g)).map(|g| (a, g))
        });
        if let Some((agent, goal)) = stray_goal {
            return Err(SimError::GoalOutsideField { name: agent.name.clone(), goal });
        }

        let zones = ZoneSet::new(self.zones)?;
        let policy = RecoveryPolicy::new(max_step(&self.field), mission_end)?;

        // ── Place agents ──────────────────────────────────────────────────
        let mut agents = self.agents;
        for (_, agent) in agents.iter_mut() {
            policy.place(agent, &zones);
            agent.record(Tick::ZERO);
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            agents,
            rngs:     self.rngs,
            zones,
            field:    self.field,
            policy,
            strategy: self.strategy,
        })
    }
}
