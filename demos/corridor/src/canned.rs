//! Offline stand-in for a chat model.

use std::sync::atomic::{AtomicUsize, Ordering};

use jamnav_heading::{LlmClient, LlmError};

/// Replies in rotation, including the failure shapes the retry loop
/// has to absorb: a rambling answer, a transport error, and
/// coordinates in several formats.
///
/// The suggested coordinates are far away; `LlmHeading` clamps them to
/// one step from the agent.
#[derive(Default)]
pub struct CannedLlm {
    calls: AtomicUsize,
}

const REPLIES: &[&str] = &[
    "Considering the jamming geometry and the history you gave me, the best option is probably to go north-west.",
    "(-9.5, 4.0)",
    "x: 6, y: -9",
    "",
    "-8 -2",
    "I am not sure.",
];

impl CannedLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl LlmClient for CannedLlm {
    fn send(&self, _prompt: &str) -> Result<String, LlmError> {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        // An empty slot simulates a dropped connection.
        match REPLIES[n % REPLIES.len()] {
            "" => Err(LlmError::Transport("connection reset by peer".into())),
            reply => Ok(reply.to_owned()),
        }
    }
}
