//! Destinations for KDF failure messages.
//!
//! A hasher forwards the primitive's message to its sink whenever a hash
//! invocation fails. What happens next (logging, collecting, aborting) is
//! the sink's policy, not the hasher's.

use std::sync::{Arc, Mutex};

/// Receives human-readable failure messages.
pub trait ErrorSink: Send + Sync {
    /// Report a failure message verbatim.
    fn report(&self, message: &str);
}

/// Default sink: emits each message through the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Sink that keeps every reported message in memory.
///
/// Clones share the same message list, so a caller can hand one clone to a
/// hasher and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages reported so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Whether nothing has been reported yet.
    pub fn is_empty(&self) -> bool {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_empty()
    }
}

impl ErrorSink for MemorySink {
    fn report(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}

impl<F> ErrorSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}
