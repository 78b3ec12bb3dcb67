//! LLM-prompted heading selection.
//!
//! # Retry policy
//!
//! Each attempt returns `Result<Position, AttemptError>`:
//!
//! - transport failure or timeout → `AttemptError::Transport`
//! - reply longer than the character budget → `AttemptError::TooLong`
//! - no matcher finds a pair → `AttemptError::Unparseable`
//!
//! Every error is logged and counted against `max_retries`.  When the
//! budget is spent the scripted strategy picks the coordinate, so an agent
//! is never left without a heading.

pub mod client;
pub mod parse;
pub mod prompt;

use jamnav_core::{AgentRng, Position, clamp_to_step};

use crate::{AttemptError, HeadingRequest, HeadingStrategy, ScriptedHeading};

use client::LlmClient;
use parse::parse_coordinate;
use prompt::build_prompt;

/// Tunables for [`LlmHeading`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LlmConfig {
    /// Prompts sent before falling back to the scripted strategy.
    pub max_retries: u32,
    /// Replies longer than this, whitespace included, are rejected unparsed.
    pub max_response_chars: usize,
    /// History samples included in the prompt.
    pub history_segments: usize,
    /// Per-request deadline; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    /// Cap on timed-out requests still running; only used with `timeout_ms`.
    pub max_in_flight: usize,
    /// Random headings the scripted fallback tries.
    pub fallback_attempts: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            max_retries:        3,
            max_response_chars: 60,
            history_segments:   5,
            timeout_ms:         None,
            max_in_flight:      client::DEFAULT_MAX_IN_FLIGHT,
            fallback_attempts:  crate::scripted::DEFAULT_ATTEMPTS,
        }
    }
}

/// Asks an LLM for the next coordinate, falling back to [`ScriptedHeading`].
pub struct LlmHeading<C> {
    client:   C,
    config:   LlmConfig,
    fallback: ScriptedHeading,
}

impl<C: LlmClient> LlmHeading<C> {
    pub fn new(client: C, config: LlmConfig) -> Self {
        let fallback = ScriptedHeading::new(config.fallback_attempts);
        Self { client, config, fallback }
    }

    /// One prompt/response round trip.
    pub fn attempt(&self, prompt: &str) -> Result<Position, AttemptError> {
        let reply = self.client.send(prompt)?;
        let len = reply.chars().count();
        if len > self.config.max_response_chars {
            return Err(AttemptError::TooLong { len, max: self.config.max_response_chars });
        }
        parse_coordinate(reply.trim()).ok_or(AttemptError::Unparseable)
    }

    /// Clamp a suggestion to one step and to the field.
    fn bound(req: &HeadingRequest<'_>, suggested: Position) -> Position {
        req.field.clamp(clamp_to_step(req.position, suggested.rounded(), req.max_step))
    }
}

impl<C: LlmClient> HeadingStrategy for LlmHeading<C> {
    fn select(&self, req: &HeadingRequest<'_>, rng: &mut AgentRng) -> Position {
        let prompt = build_prompt(req, self.config.history_segments, self.config.max_response_chars);

        for attempt in 1..=self.config.max_retries {
            match self.attempt(&prompt) {
                Ok(suggested) => {
                    let heading = Self::bound(req, suggested);
                    tracing::debug!(agent = req.agent, attempt, %suggested, %heading, "LLM heading accepted");
                    return heading;
                }
                Err(err) => {
                    tracing::warn!(agent = req.agent, attempt, error = %err, "LLM heading attempt failed");
                }
            }
        }

        tracing::warn!(
            agent = req.agent,
            retries = self.config.max_retries,
            "LLM retry budget exhausted, using scripted heading"
        );
        self.fallback.select(req, rng)
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}
