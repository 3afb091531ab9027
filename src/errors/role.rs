/// Errors from strict role parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    /// The role code is not one the platform defines
    #[error("unrecognized role: {0}")]
    Unrecognized(String),
}
