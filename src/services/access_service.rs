use std::sync::Arc;

use serde_json::json;

use crate::errors::access::AccessError;
use crate::services::role_policy::{self, AssignmentRequest, Decision, Operation};
use crate::stores::AuditLog;
use crate::types::internal::audit::{AuditEvent, EventType};
use crate::types::internal::context::RequestContext;
use crate::types::role::Role;
use crate::types::user::UserRecord;

/// Access service gating role mutations before they reach the admin API
///
/// This service evaluates the role-assignment policy for the acting
/// operator, records an audit event for both outcomes, and converts
/// denials into errors so embedding layers abort the mutation with `?`.
/// The admin API re-checks server-side; this gate exists so operators
/// get an immediate, explained refusal instead of a round trip.
pub struct AccessService {
    audit_log: Arc<dyn AuditLog>,
}

impl AccessService {
    /// Create an AccessService writing to the given audit sink
    pub fn new(audit_log: Arc<dyn AuditLog>) -> Self {
        Self { audit_log }
    }

    /// Authorize changing an existing user's role
    ///
    /// # Arguments
    /// * `ctx` - RequestContext with the acting operator's claims
    /// * `target` - The user whose role would change
    /// * `new_role` - Requested role code
    ///
    /// # Returns
    /// * `Ok(())` - The policy allows the change
    /// * `Err(AccessError)` - Missing claims, or denied with a reason
    pub fn authorize_role_change(
        &self,
        ctx: &RequestContext,
        target: &UserRecord,
        new_role: &str,
    ) -> Result<(), AccessError> {
        let claims = ctx.claims.as_ref().ok_or(AccessError::Unauthenticated)?;

        let request = AssignmentRequest {
            acting_role: &claims.role,
            target_role: new_role,
            operation: Operation::ChangeRole,
            target_current_role: Some(&target.role_code),
        };

        match role_policy::evaluate(&request) {
            Decision::Allowed => {
                self.audit_log.record(
                    AuditEvent::new(EventType::RoleChangeAuthorized)
                        .with_actor(&claims.sub)
                        .with_target(target.id.to_string())
                        .with_ip_address(ctx.ip_address.clone())
                        .with_data("previous_role", json!(target.role_code))
                        .with_data("new_role", json!(new_role)),
                );
                tracing::info!(
                    "Role change to {} authorized for user {} by {}",
                    new_role,
                    target.id,
                    claims.sub
                );
                Ok(())
            }
            Decision::Denied(reason) => {
                self.audit_log.record(
                    AuditEvent::new(EventType::RoleChangeDenied)
                        .with_actor(&claims.sub)
                        .with_target(target.id.to_string())
                        .with_ip_address(ctx.ip_address.clone())
                        .with_data("requested_role", json!(new_role))
                        .with_data("reason", json!(reason.as_str())),
                );
                tracing::warn!(
                    "Role change to {} for user {} denied for {}: {}",
                    new_role,
                    target.id,
                    claims.sub,
                    reason
                );
                Err(AccessError::PolicyDenied(reason))
            }
        }
    }

    /// Authorize creating a new user with the requested role
    ///
    /// # Arguments
    /// * `ctx` - RequestContext with the acting operator's claims
    /// * `requested_role` - Role code for the account being created
    ///
    /// # Returns
    /// * `Ok(())` - The policy allows the creation
    /// * `Err(AccessError)` - Missing claims, or denied with a reason
    pub fn authorize_user_create(
        &self,
        ctx: &RequestContext,
        requested_role: &str,
    ) -> Result<(), AccessError> {
        let claims = ctx.claims.as_ref().ok_or(AccessError::Unauthenticated)?;

        match role_policy::can_assign(&claims.role, requested_role, Operation::CreateUser) {
            Decision::Allowed => {
                self.audit_log.record(
                    AuditEvent::new(EventType::UserCreateAuthorized)
                        .with_actor(&claims.sub)
                        .with_ip_address(ctx.ip_address.clone())
                        .with_data("requested_role", json!(requested_role)),
                );
                tracing::info!(
                    "User creation with role {} authorized for {}",
                    requested_role,
                    claims.sub
                );
                Ok(())
            }
            Decision::Denied(reason) => {
                self.audit_log.record(
                    AuditEvent::new(EventType::UserCreateDenied)
                        .with_actor(&claims.sub)
                        .with_ip_address(ctx.ip_address.clone())
                        .with_data("requested_role", json!(requested_role))
                        .with_data("reason", json!(reason.as_str())),
                );
                tracing::warn!(
                    "User creation with role {} denied for {}: {}",
                    requested_role,
                    claims.sub,
                    reason
                );
                Err(AccessError::PolicyDenied(reason))
            }
        }
    }

    /// Roles the acting operator may assign via `operation`
    ///
    /// Returns an empty list for unauthenticated contexts, which hides
    /// the pickers entirely in the console.
    pub fn assignable_roles(&self, ctx: &RequestContext, operation: Operation) -> Vec<Role> {
        match ctx.claims.as_ref() {
            Some(claims) => role_policy::available_roles_for(&claims.role, operation),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "access_service_test.rs"]
mod access_service_test;
