use crate::services::role_policy::DenialReason;

/// Errors returned by the access service
///
/// A policy denial is a normal, expected outcome; it is surfaced as an
/// error here so that embedding layers can abort the mutation with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// Request carried no validated claims
    #[error("authentication required")]
    Unauthenticated,

    /// The role-assignment policy denied the request
    #[error("{0}")]
    PolicyDenied(DenialReason),
}

impl AccessError {
    /// The denial reason, when the error is a policy denial
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            AccessError::PolicyDenied(reason) => Some(*reason),
            _ => None,
        }
    }
}
