use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::role::Role;

/// Identity verification state of a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Unverified,
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// Users awaiting review: never verified or currently queued
    pub fn is_pending_review(&self) -> bool {
        matches!(self, VerificationStatus::Unverified | VerificationStatus::Pending)
    }
}

/// A user row as returned by the admin API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,

    /// Raw role code as stored by the platform. Codes this crate does
    /// not recognize stay intact here; policy checks fail closed on them.
    pub role_code: String,

    pub is_active: bool,
    pub verification_status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserRecord {
    /// The parsed role, if the stored code is one this crate knows
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role_code)
    }

    pub fn is_administrative(&self) -> bool {
        self.role().map(|r| r.is_administrative()).unwrap_or(false)
    }
}
