//! The chat-client seam and a deadline wrapper.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::LlmError;

/// A configured LLM chat client.
///
/// Transport, model selection, and authentication live behind this trait.
/// Implementations must be thread-safe (Send + Sync).
///
/// # Example
/// ```ignore
/// struct HttpChat { /* ... */ }
///
/// impl LlmClient for HttpChat {
///     fn send(&self, prompt: &str) -> Result<String, LlmError> {
///         // POST the prompt, return the completion text
///     }
/// }
/// ```
pub trait LlmClient: Send + Sync {
    /// Submit `prompt` and block until the reply text arrives.
    fn send(&self, prompt: &str) -> Result<String, LlmError>;
}

impl<C: LlmClient + ?Sized> LlmClient for Arc<C> {
    fn send(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).send(prompt)
    }
}

impl<C: LlmClient + ?Sized> LlmClient for Box<C> {
    fn send(&self, prompt: &str) -> Result<String, LlmError> {
        (**self).send(prompt)
    }
}

/// Requests a [`DeadlineClient`] lets run at once unless told otherwise.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 8;

/// Bounds every `send` by a wall-clock deadline.
///
/// Each call runs on a short-lived worker thread; when the deadline passes
/// the caller gets [`LlmError::Timeout`] and the worker is left to finish
/// on its own.  Its late reply is dropped.
///
/// Abandoned workers still count as in flight until the inner client
/// returns.  Once `max_in_flight` are running, `send` fails fast with
/// [`LlmError::Busy`] instead of spawning another thread, so a hung
/// backend holds at most `max_in_flight` threads.
pub struct DeadlineClient<C: ?Sized> {
    inner:         Arc<C>,
    timeout:       Duration,
    in_flight:     Arc<AtomicUsize>,
    max_in_flight: usize,
}

impl<C: LlmClient + ?Sized + 'static> DeadlineClient<C> {
    pub fn new(inner: Arc<C>, timeout: Duration) -> Self {
        Self {
            inner,
            timeout,
            in_flight:     Arc::new(AtomicUsize::new(0)),
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
        }
    }

    pub fn with_max_in_flight(mut self, n: usize) -> Self {
        self.max_in_flight = n;
        self
    }

    /// Worker threads whose inner `send` has not returned yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl<C: LlmClient + ?Sized + 'static> LlmClient for DeadlineClient<C> {
    fn send(&self, prompt: &str) -> Result<String, LlmError> {
        let max = self.max_in_flight;
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < max).then_some(n + 1))
            .map_err(LlmError::Busy)?;

        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);
        let in_flight = Arc::clone(&self.in_flight);
        let prompt = prompt.to_owned();

        let spawned = thread::Builder::new()
            .name("llm-request".into())
            .spawn(move || {
                let reply = inner.send(&prompt);
                in_flight.fetch_sub(1, Ordering::AcqRel);
                // Receiver may be gone after a timeout.
                let _ = tx.send(reply);
            });
        if let Err(e) = spawned {
            self.in_flight.fetch_sub(1, Ordering::AcqRel);
            return Err(LlmError::Transport(format!("failed to spawn request thread: {e}")));
        }

        match rx.recv_timeout(self.timeout) {
            Ok(reply) => reply,
            Err(RecvTimeoutError::Timeout) => Err(LlmError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => {
                Err(LlmError::Transport("request thread exited without a reply".into()))
            }
        }
    }
}
