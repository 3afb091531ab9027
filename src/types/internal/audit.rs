use std::collections::HashMap;
use std::fmt;

/// Event types for audit logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    RoleChangeAuthorized,
    RoleChangeDenied,
    UserCreateAuthorized,
    UserCreateDenied,
    Custom(String),
}

impl EventType {
    /// String representation written to the audit sink
    pub fn as_str(&self) -> &str {
        match self {
            Self::RoleChangeAuthorized => "role_change_authorized",
            Self::RoleChangeDenied => "role_change_denied",
            Self::UserCreateAuthorized => "user_create_authorized",
            Self::UserCreateDenied => "user_create_denied",
            Self::Custom(s) => s.as_str(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Audit event structure for building and recording audit entries
///
/// Mirrors the admin action log of the platform API: who acted, on
/// what, from where, with operation-specific details in `data`.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_type: EventType,
    pub actor_id: Option<String>,
    pub target_id: Option<String>,
    pub ip_address: Option<String>,
    pub data: HashMap<String, serde_json::Value>,
}

impl AuditEvent {
    /// Create a new audit event with the specified event type
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            actor_id: None,
            target_id: None,
            ip_address: None,
            data: HashMap::new(),
        }
    }

    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    pub fn with_ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_have_stable_codes() {
        assert_eq!(EventType::RoleChangeAuthorized.as_str(), "role_change_authorized");
        assert_eq!(EventType::UserCreateDenied.as_str(), "user_create_denied");
        assert_eq!(EventType::Custom("bulk_suspend".to_string()).as_str(), "bulk_suspend");
    }

    #[test]
    fn builder_accumulates_fields() {
        let event = AuditEvent::new(EventType::RoleChangeDenied)
            .with_actor("op-1")
            .with_target("user-2")
            .with_ip_address(Some("10.0.0.1".to_string()))
            .with_data("reason", serde_json::json!("unrecognized role"));

        assert_eq!(event.actor_id.as_deref(), Some("op-1"));
        assert_eq!(event.target_id.as_deref(), Some("user-2"));
        assert_eq!(event.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(event.data.len(), 1);
    }
}
