use std::sync::{Mutex, PoisonError};

use crate::types::internal::audit::AuditEvent;

/// Sink for audit events
///
/// The platform's audit trail is owned by the admin API; embedders plug
/// in whatever forwards events there. The sinks below cover local
/// logging and tests.
pub trait AuditLog: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Audit sink that emits events through `tracing`
pub struct TracingAuditLog;

impl AuditLog for TracingAuditLog {
    fn record(&self, event: AuditEvent) {
        tracing::info!(
            event_type = %event.event_type,
            actor_id = event.actor_id.as_deref().unwrap_or("unknown"),
            target_id = event.target_id.as_deref().unwrap_or("-"),
            ip_address = event.ip_address.as_deref().unwrap_or("-"),
            data = %serde_json::Value::Object(event.data.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            "audit event"
        );
    }
}

/// In-memory audit sink for tests
pub struct MemoryAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self { events: Mutex::new(Vec::new()) }
    }

    /// Snapshot of everything recorded so far
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Default for MemoryAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditLog for MemoryAuditLog {
    fn record(&self, event: AuditEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}
