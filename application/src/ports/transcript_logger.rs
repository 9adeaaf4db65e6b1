//! Port for structured transcript logging.
//!
//! Records conversation events (turns, corrections, dispatch failures,
//! resets) to a machine-readable log. This is separate from `tracing`
//! diagnostics: tracing carries operational messages, this port captures
//! what was actually said.

use serde_json::Value;

/// A structured transcript event.
pub struct TranscriptEvent {
    /// Event type identifier.
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    pub fn user_message(text: &str) -> Self {
        Self::new("user_message", serde_json::json!({ "text": text }))
    }

    pub fn assistant_message(text: &str) -> Self {
        Self::new("assistant_message", serde_json::json!({ "text": text }))
    }

    pub fn notice(kind: &str, text: &str) -> Self {
        Self::new("notice", serde_json::json!({ "kind": kind, "text": text }))
    }

    pub fn dispatch_failed(error: &str) -> Self {
        Self::new("dispatch_failed", serde_json::json!({ "error": error }))
    }

    pub fn session_reset() -> Self {
        Self::new("session_reset", serde_json::json!({}))
    }

    pub fn session_ended() -> Self {
        Self::new("session_ended", serde_json::json!({}))
    }
}

/// Port for recording transcript events.
///
/// `log` is synchronous and non-fallible so a broken log sink can never
/// disturb the conversation; implementations swallow their own errors.
pub trait TranscriptLogger: Send + Sync {
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
