//! Strategy selection from configuration.

use std::sync::Arc;
use std::time::Duration;

use crate::llm::client::{DeadlineClient, LlmClient};
use crate::{HeadingError, HeadingResult, HeadingStrategy, LlmConfig, LlmHeading, ScriptedHeading};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptedConfig {
    pub attempts: u32,
}

impl Default for ScriptedConfig {
    fn default() -> Self {
        Self { attempts: crate::scripted::DEFAULT_ATTEMPTS }
    }
}

/// Which heading strategy the stepper uses.
///
/// With the `serde` feature this is internally tagged:
///
/// ```json
/// { "kind": "llm", "max_retries": 5, "timeout_ms": 2000 }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum StrategyConfig {
    Scripted(ScriptedConfig),
    Llm(LlmConfig),
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::Scripted(ScriptedConfig::default())
    }
}

/// Instantiate the configured strategy.
///
/// The LLM strategy needs `client`; when `timeout_ms` is set the client is
/// wrapped in a [`DeadlineClient`] capped at `max_in_flight` requests.
pub fn build_strategy(
    config: &StrategyConfig,
    client: Option<Arc<dyn LlmClient>>,
) -> HeadingResult<Box<dyn HeadingStrategy>> {
    match config {
        StrategyConfig::Scripted(s) => {
            if s.attempts == 0 {
                return Err(HeadingError::Config("scripted attempts must be at least 1".into()));
            }
            Ok(Box::new(ScriptedHeading::new(s.attempts)))
        }
        StrategyConfig::Llm(llm) => {
            if llm.max_response_chars == 0 {
                return Err(HeadingError::Config("max_response_chars must be positive".into()));
            }
            if llm.timeout_ms.is_some() && llm.max_in_flight == 0 {
                return Err(HeadingError::Config("max_in_flight must be positive".into()));
            }
            let client = client.ok_or(HeadingError::MissingClient)?;
            match llm.timeout_ms {
                Some(ms) => {
                    let bounded = DeadlineClient::new(client, Duration::from_millis(ms))
                        .with_max_in_flight(llm.max_in_flight);
                    Ok(Box::new(LlmHeading::new(bounded, llm.clone())))
                }
                None => Ok(Box::new(LlmHeading::new(client, llm.clone()))),
            }
        }
    }
}
