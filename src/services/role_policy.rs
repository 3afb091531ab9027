use std::fmt;

use serde::Serialize;

use crate::types::role::Role;

/// Operation a role assignment is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Creating a new user account with the target role
    CreateUser,
    /// Changing the role of an existing user
    ChangeRole,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateUser => "create_user",
            Operation::ChangeRole => "change_role",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-assignment request as received from the console
///
/// Role fields are raw codes; unknown codes are handled by the policy
/// itself rather than rejected up front. `target_current_role` is only
/// meaningful for `ChangeRole` and stays `None` when the target user is
/// unspecified, e.g. when deriving picker contents.
#[derive(Debug, Clone)]
pub struct AssignmentRequest<'a> {
    pub acting_role: &'a str,
    pub target_role: &'a str,
    pub operation: Operation,
    pub target_current_role: Option<&'a str>,
}

/// Reason a role assignment was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    CannotCreateAdminTier,
    CannotAssignSuperAdmin,
    CannotModifySuperAdmin,
    CannotAssignAdminTier,
    CannotModifyAdminTier,
    InsufficientPrivilege,
    UnrecognizedRole,
}

impl DenialReason {
    /// Operator-facing message for this denial
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CannotCreateAdminTier => "cannot create admin-tier role via user creation",
            Self::CannotAssignSuperAdmin => "cannot assign super_admin",
            Self::CannotModifySuperAdmin => "cannot modify super_admin",
            Self::CannotAssignAdminTier => "cannot assign admin-tier role",
            Self::CannotModifyAdminTier => "cannot modify admin-tier user",
            Self::InsufficientPrivilege => "insufficient privilege to change roles",
            Self::UnrecognizedRole => "unrecognized role",
        }
    }
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a policy evaluation
///
/// Denial is a normal return value, not an error; this function never
/// panics and never fails. Callers display the reason and abort the
/// mutation before any network call. The platform API re-checks
/// server-side; this decision is a UX gate, not the security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Denied(DenialReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            Decision::Allowed => None,
            Decision::Denied(reason) => Some(*reason),
        }
    }
}

/// Evaluate a full assignment request
///
/// For `ChangeRole` the target user's current role participates in the
/// decision when present; picker derivation passes `None`.
pub fn evaluate(request: &AssignmentRequest<'_>) -> Decision {
    match request.operation {
        Operation::CreateUser => evaluate_create(request.target_role),
        Operation::ChangeRole => {
            evaluate_change(request.acting_role, request.target_role, request.target_current_role)
        }
    }
}

/// Decide whether `acting_role` may assign `target_role`, with the
/// target user unspecified
pub fn can_assign(acting_role: &str, target_role: &str, operation: Operation) -> Decision {
    evaluate(&AssignmentRequest {
        acting_role,
        target_role,
        operation,
        target_current_role: None,
    })
}

/// Roles `acting_role` may assign via `operation`, for populating
/// selection lists
pub fn available_roles_for(acting_role: &str, operation: Operation) -> Vec<Role> {
    Role::ALL
        .iter()
        .copied()
        .filter(|candidate| can_assign(acting_role, candidate.code(), operation).is_allowed())
        .collect()
}

// Admin-tier roles can never be created through the user-creation path,
// no matter who is acting. Unknown codes are not admin-tier, so they
// pass here; the platform API rejects codes it does not store.
fn evaluate_create(target_role: &str) -> Decision {
    match Role::parse(target_role) {
        Some(role) if role.is_administrative() => {
            Decision::Denied(DenialReason::CannotCreateAdminTier)
        }
        _ => Decision::Allowed,
    }
}

// Role changes fail closed: any unrecognized code in the request denies
// outright, so a typo can never escalate.
fn evaluate_change(
    acting_role: &str,
    target_role: &str,
    target_current_role: Option<&str>,
) -> Decision {
    let Some(acting) = Role::parse(acting_role) else {
        return Decision::Denied(DenialReason::UnrecognizedRole);
    };
    let Some(target) = Role::parse(target_role) else {
        return Decision::Denied(DenialReason::UnrecognizedRole);
    };
    let current = match target_current_role {
        Some(code) => match Role::parse(code) {
            Some(role) => Some(role),
            None => return Decision::Denied(DenialReason::UnrecognizedRole),
        },
        None => None,
    };

    match acting {
        Role::SuperAdmin => {
            if target == Role::SuperAdmin {
                return Decision::Denied(DenialReason::CannotAssignSuperAdmin);
            }
            if current == Some(Role::SuperAdmin) {
                return Decision::Denied(DenialReason::CannotModifySuperAdmin);
            }
            Decision::Allowed
        }
        Role::Admin => {
            if matches!(target, Role::Admin | Role::SuperAdmin) {
                return Decision::Denied(DenialReason::CannotAssignAdminTier);
            }
            if matches!(current, Some(Role::Admin) | Some(Role::SuperAdmin)) {
                return Decision::Denied(DenialReason::CannotModifyAdminTier);
            }
            Decision::Allowed
        }
        _ => Decision::Denied(DenialReason::InsufficientPrivilege),
    }
}

#[cfg(test)]
#[path = "role_policy_test.rs"]
mod role_policy_test;
