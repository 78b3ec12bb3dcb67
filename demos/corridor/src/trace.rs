//! CSV trace output.
//!
//! Creates two files in the output directory:
//! - `trace.csv`: one row per agent per tick, the four record fields plus
//!   a unix timestamp
//! - `snapshots.csv`: recovery phase and safe position at snapshot ticks

use std::fs::File;
use std::path::Path;

use csv::Writer;

use jamnav_agent::AgentRegistry;
use jamnav_core::{SimClock, Tick};
use jamnav_sim::{SimObserver, TickRecord};

/// Writes tick records and snapshots as CSV.
///
/// Observer hooks cannot fail, so the first write error is stored and
/// later writes are skipped; retrieve it with
/// [`take_error`][Self::take_error].
pub struct CsvTrace {
    trace:           Writer<File>,
    snapshots:       Writer<File>,
    clock:           SimClock,
    pub rows:        usize,
    pub jammed_rows: usize,
    last_error:      Option<csv::Error>,
}

impl CsvTrace {
    /// Open (or create) both files in `dir` and write the header rows.
    pub fn new(dir: &Path, clock: SimClock) -> csv::Result<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(["unix_time_secs", "tick", "agent_id", "x", "y", "communication_quality", "jammed"])?;

        let mut snapshots = Writer::from_path(dir.join("snapshots.csv"))?;
        snapshots.write_record(["tick", "agent_id", "phase", "pending_waypoints", "safe_x", "safe_y"])?;

        Ok(Self {
            trace,
            snapshots,
            clock,
            rows:        0,
            jammed_rows: 0,
            last_error:  None,
        })
    }

    pub fn take_error(&mut self) -> Option<csv::Error> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: csv::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                tracing::error!(error = %e, "trace output failed");
                self.last_error = Some(e);
            }
        }
    }

    fn write_records(&mut self, tick: Tick, records: &[TickRecord]) -> csv::Result<()> {
        let unix = self.clock.unix_secs_at(tick);
        for r in records {
            self.trace.write_record(&[
                unix.to_string(),
                tick.0.to_string(),
                r.agent_id.clone(),
                format!("{:.3}", r.position.x),
                format!("{:.3}", r.position.y),
                format!("{:.1}", r.communication_quality),
                (r.jammed as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshot(&mut self, tick: Tick, agents: &AgentRegistry) -> csv::Result<()> {
        for (_, agent) in agents.iter() {
            let safe = agent.last_safe_position;
            self.snapshots.write_record(&[
                tick.0.to_string(),
                agent.name.clone(),
                agent.recovery_phase.as_str().to_owned(),
                agent.pending_path.len().to_string(),
                safe.map(|p| format!("{:.3}", p.x)).unwrap_or_default(),
                safe.map(|p| format!("{:.3}", p.y)).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }
}

impl SimObserver for CsvTrace {
    fn on_tick_end(&mut self, tick: Tick, records: &[TickRecord]) {
        if self.last_error.is_some() {
            return;
        }
        self.rows += records.len();
        self.jammed_rows += records.iter().filter(|r| r.jammed).count();
        let result = self.write_records(tick, records);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentRegistry) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.write_snapshot(tick, agents);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self
            .trace
            .flush()
            .and_then(|_| self.snapshots.flush())
            .map_err(csv::Error::from);
        self.store_err(result);
    }
}
