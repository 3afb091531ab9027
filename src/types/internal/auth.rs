use serde::{Deserialize, Serialize};

/// Claims supplied by the identity layer
///
/// The session token is validated elsewhere; by the time a request
/// reaches this crate the claims are already trusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,

    /// Role code of the acting operator
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
