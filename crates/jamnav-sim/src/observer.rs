//! Simulation observer trait for progress reporting and data collection.

use jamnav_agent::AgentRegistry;
use jamnav_core::Tick;

use crate::TickRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: jammed-agent counter
///
/// ```rust,ignore
/// struct JamCounter { peak: usize }
///
/// impl SimObserver for JamCounter {
///     fn on_tick_end(&mut self, _tick: Tick, records: &[TickRecord]) {
///         let jammed = records.iter().filter(|r| r.jammed).count();
///         self.peak = self.peak.max(jammed);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with one record per agent, in
    /// registry order.
    fn on_tick_end(&mut self, _tick: Tick, _records: &[TickRecord]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to the full registry (phases, paths,
    /// histories) for writers that need more than the tick records.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentRegistry) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
