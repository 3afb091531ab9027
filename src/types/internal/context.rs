use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::internal::auth::Claims;

/// Unique identifier for a request, for tracing across layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn generate() -> Self {
        RequestId(Uuid::new_v4())
    }
}

/// Source of the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestSource {
    /// Request originated from the admin console
    Console,

    /// Request originated from a CLI command
    CLI,

    /// Request originated from system (automated operations)
    System,
}

/// Request context that flows through all layers
///
/// Contains contextual information about the current request that is
/// needed for logging and auditing across service layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<String>,

    /// Unique identifier for this request
    pub request_id: RequestId,

    /// Whether the request carries validated claims
    pub authenticated: bool,

    /// Claims from the identity layer, if authenticated
    pub claims: Option<Claims>,

    /// Source of the request
    pub source: RequestSource,

    /// Actor who initiated the operation
    pub actor_id: String,
}

impl RequestContext {
    /// Create an unauthenticated context for a console request
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::generate(),
            authenticated: false,
            claims: None,
            source: RequestSource::Console,
            actor_id: "unknown".to_string(),
        }
    }

    /// Create a RequestContext for CLI operations
    pub fn for_cli(command_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::generate(),
            authenticated: false,
            claims: None,
            source: RequestSource::CLI,
            actor_id: format!("cli:{}", command_name),
        }
    }

    /// Create a RequestContext for system operations
    pub fn for_system(operation_name: &str) -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::generate(),
            authenticated: false,
            claims: None,
            source: RequestSource::System,
            actor_id: format!("system:{}", operation_name),
        }
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set authentication state with claims; actor_id follows the subject
    pub fn with_auth(mut self, claims: Claims) -> Self {
        self.actor_id = claims.sub.clone();
        self.authenticated = true;
        self.claims = Some(claims);
        self
    }

    /// Set the actor_id
    pub fn with_actor_id(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = actor_id.into();
        self
    }

    /// Role code of the acting operator, if authenticated
    pub fn acting_role(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.role.as_str())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
