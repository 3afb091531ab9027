// Stores layer - Sinks and storage boundaries
pub mod audit_log;

pub use audit_log::{AuditLog, MemoryAuditLog, TracingAuditLog};
