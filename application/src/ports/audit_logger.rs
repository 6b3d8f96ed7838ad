//! Port for structured audit logging.
//!
//! Defines the [`AuditLogger`] trait for recording assignment changes
//! (bulk assignments, skipped duplicates) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable trail of what changed (JSONL).

use serde_json::Value;

/// A structured audit event.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The adapter adds the timestamp when the event is written.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event type identifier (e.g., "bulk_assign").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl AuditEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging audit events.
///
/// `log` is synchronous and infallible; write failures are the adapter's
/// concern and never abort an assignment.
pub trait AuditLogger: Send + Sync {
    fn log(&self, event: AuditEvent);
}

/// No-op implementation for tests and when auditing is disabled.
pub struct NoAuditLogger;

impl AuditLogger for NoAuditLogger {
    fn log(&self, _event: AuditEvent) {}
}
