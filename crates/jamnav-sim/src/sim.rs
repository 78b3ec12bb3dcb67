//! The `Sim` struct and its tick loop.

use jamnav_agent::{AgentRegistry, AgentRngs};
use jamnav_core::{AgentId, FieldBounds, Position, SimClock, SimConfig, Tick};
use jamnav_heading::{HeadingRequest, HeadingStrategy};
use jamnav_recovery::RecoveryPolicy;
use jamnav_zone::ZoneSet;

use crate::{SimObserver, SimResult, TickRecord};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<H>` owns the registry and drives the three-phase tick loop:
///
/// 1. **Entry detection** (sequential): flag agents that stand in a zone
///    and start a retreat for every jammed agent not yet recovering.
/// 2. **Heading phase** (optionally parallel with the `parallel` feature):
///    ask `H` for a coordinate for each agent in `AwaitingNewHeading`.
///    Exactly one request per agent per tick, all against the same
///    read-only registry.
/// 3. **Advance phase** (sequential, ascending `AgentId`): move every agent
///    one step via [`RecoveryPolicy::advance`] and append its history.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<H: HeadingStrategy> {
    /// Global configuration (total ticks, seed, tick duration, …).
    pub config: SimConfig,

    /// Tick 0 is the initial placement; each step advances it first.
    pub clock: SimClock,

    pub agents: AgentRegistry,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    pub zones: ZoneSet,

    pub field: FieldBounds,

    /// Step bound and mission endpoint.
    pub policy: RecoveryPolicy,

    /// Consulted once per agent per tick while it awaits a heading.
    pub strategy: H,
}

impl<H: HeadingStrategy> Sim<H> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        tracing::info!(
            agents   = self.agents.len(),
            zones    = self.zones.len(),
            ticks    = self.config.total_ticks,
            strategy = self.strategy.name(),
            "simulation started"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        tracing::info!(
            tick    = self.clock.current_tick.0,
            jammed  = self.jammed_count(),
            arrived = self.all_arrived(),
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    /// Advance the clock and process one tick without observers.
    pub fn step(&mut self) -> SimResult<Vec<TickRecord>> {
        self.clock.advance();
        self.process_tick(self.clock.current_tick)
    }

    /// The current record for every agent, in registry order.
    pub fn records(&self) -> Vec<TickRecord> {
        self.agents.iter().map(|(_, a)| TickRecord::from(a)).collect()
    }

    /// `true` once every agent is clear, idle, and standing on its goal.
    pub fn all_arrived(&self) -> bool {
        let end = self.policy.mission_end();
        self.agents
            .iter()
            .all(|(_, a)| !a.jammed && a.is_idle() && a.position == a.goal_or(end))
    }

    pub fn jammed_count(&self) -> usize {
        self.agents.iter().filter(|(_, a)| a.jammed).count()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.clock.advance();
        let now = self.clock.current_tick;

        observer.on_tick_start(now);
        let records = self.process_tick(now)?;
        observer.on_tick_end(now, &records);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<Vec<TickRecord>> {
        // ── Phase 1: entry detection ──────────────────────────────────────
        let mut awaiting: Vec<AgentId> = Vec::new();
        for (id, agent) in self.agents.iter_mut() {
            self.policy.detect_entry(agent, &self.zones);
            if RecoveryPolicy::needs_heading(agent) {
                awaiting.push(id);
            }
        }

        // ── Phase 2: heading requests ─────────────────────────────────────
        //
        // `awaiting` is ascending, so the results come back in registry
        // order and each agent gets at most one heading.
        let mut headings: Vec<Option<Position>> = vec![None; self.agents.len()];
        for (id, heading) in self.compute_headings(&awaiting) {
            headings[id.index()] = Some(heading);
        }

        // ── Phase 3: advance (sequential) ─────────────────────────────────
        let mut records = Vec::with_capacity(self.agents.len());
        for (id, agent) in self.agents.iter_mut() {
            let outcome = self.policy.advance(agent, &self.zones, headings[id.index()].take())?;
            tracing::trace!(tick = now.0, agent = %agent.name, %outcome, "advanced");
            agent.record(now);
            records.push(TickRecord::from(&*agent));
        }

        tracing::debug!(
            tick      = now.0,
            headings  = awaiting.len(),
            jammed    = records.iter().filter(|r| r.jammed).count(),
            "tick complete"
        );
        Ok(records)
    }

    /// Ask the strategy for a heading for each agent in `awaiting`.
    ///
    /// With the `parallel` Cargo feature the requests run on Rayon's
    /// thread pool; each task owns its agent's RNG exclusively.
    fn compute_headings(&mut self, awaiting: &[AgentId]) -> Vec<(AgentId, Position)> {
        if awaiting.is_empty() {
            return Vec::new();
        }

        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents   = &self.agents;
        let zones    = &self.zones;
        let field    = self.field;
        let max_step = self.policy.max_step();
        let strategy = &self.strategy;
        let rngs     = self.rngs.select_mut(awaiting);

        #[cfg(not(feature = "parallel"))]
        {
            rngs.into_iter()
                .filter_map(|(id, rng)| {
                    let request = HeadingRequest::new(agents.get(id)?, field, zones, max_step);
                    Some((id, strategy.select(&request, rng)))
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.into_par_iter()
                .filter_map(|(id, rng)| {
                    let request = HeadingRequest::new(agents.get(id)?, field, zones, max_step);
                    Some((id, strategy.select(&request, rng)))
                })
                .collect()
        }
    }
}
