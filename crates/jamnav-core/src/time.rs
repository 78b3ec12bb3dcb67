//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick advances
//! every agent by at most one waypoint.  The mapping to wall-clock time is
//! held in `SimClock` and used only by downstream loggers that attach a
//! timestamp to each tick record:
//!
//!   wall_time = start_unix_secs + tick * tick_duration_secs

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and Unix wall-clock seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (seconds since epoch) of tick 0.
    pub start_unix_secs: i64,
    /// How many real seconds one tick represents.
    pub tick_duration_secs: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(start_unix_secs: i64, tick_duration_secs: u32) -> Self {
        Self {
            start_unix_secs,
            tick_duration_secs,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.next();
    }

    /// Unix timestamp corresponding to `tick`.
    #[inline]
    pub fn unix_secs_at(&self, tick: Tick) -> i64 {
        self.start_unix_secs + tick.0 as i64 * self.tick_duration_secs as i64
    }

    /// Unix timestamp corresponding to `current_tick`.
    #[inline]
    pub fn current_unix_secs(&self) -> i64 {
        self.unix_secs_at(self.current_tick)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (unix {})", self.current_tick, self.current_unix_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level timing and seeding.
///
/// Embedded in the scenario file loaded by the application crate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp for tick 0.
    pub start_unix_secs: i64,

    /// Seconds per tick.  Only used to timestamp output.
    pub tick_duration_secs: u32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Emit a snapshot every N ticks.  1 = every tick; 0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_secs:       0,
            tick_duration_secs:    1,
            total_ticks:           200,
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The last tick simulated; tick 0 is the initial placement.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_secs, self.tick_duration_secs)
    }
}
