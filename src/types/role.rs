use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::role::RoleError;

/// Privilege tier of a role
///
/// Administrative roles grant access to the admin console; ordinary
/// roles represent regular platform participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleTier {
    Administrative,
    Ordinary,
}

/// Platform role, identified on the wire by a snake_case code
///
/// Role codes compare case-insensitively everywhere; `parse` is the
/// single entry point for turning raw strings into roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    FinanceManager,
    Moderator,
    SupportAgent,
    ProjectManager,
    GeneralContractor,
    Subcontractor,
    TradeSpecialist,
    Viewer,
    Client,
}

impl Role {
    /// Every known role, administrative tier first
    pub const ALL: [Role; 11] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::FinanceManager,
        Role::Moderator,
        Role::SupportAgent,
        Role::ProjectManager,
        Role::GeneralContractor,
        Role::Subcontractor,
        Role::TradeSpecialist,
        Role::Viewer,
        Role::Client,
    ];

    /// Canonical wire code for this role
    pub fn code(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::FinanceManager => "finance_manager",
            Role::Moderator => "moderator",
            Role::SupportAgent => "support_agent",
            Role::ProjectManager => "project_manager",
            Role::GeneralContractor => "general_contractor",
            Role::Subcontractor => "subcontractor",
            Role::TradeSpecialist => "trade_specialist",
            Role::Viewer => "viewer",
            Role::Client => "client",
        }
    }

    /// Human-readable label shown in the console and matched by search
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::FinanceManager => "Finance Manager",
            Role::Moderator => "Moderator",
            Role::SupportAgent => "Support Agent",
            Role::ProjectManager => "Project Manager",
            Role::GeneralContractor => "General Contractor",
            Role::Subcontractor => "Subcontractor",
            Role::TradeSpecialist => "Trade Specialist",
            Role::Viewer => "Viewer",
            Role::Client => "Client",
        }
    }

    pub fn tier(&self) -> RoleTier {
        match self {
            Role::SuperAdmin
            | Role::Admin
            | Role::FinanceManager
            | Role::Moderator
            | Role::SupportAgent => RoleTier::Administrative,
            Role::ProjectManager
            | Role::GeneralContractor
            | Role::Subcontractor
            | Role::TradeSpecialist
            | Role::Viewer
            | Role::Client => RoleTier::Ordinary,
        }
    }

    pub fn is_administrative(&self) -> bool {
        self.tier() == RoleTier::Administrative
    }

    /// Parse a raw role code, case-insensitively
    ///
    /// Returns `None` for codes this crate does not know about. Policy
    /// checks treat unknown codes as fail-closed input; see the role
    /// policy module.
    pub fn parse(code: &str) -> Option<Role> {
        match code.trim().to_ascii_lowercase().as_str() {
            "super_admin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "finance_manager" => Some(Role::FinanceManager),
            "moderator" => Some(Role::Moderator),
            "support_agent" => Some(Role::SupportAgent),
            "project_manager" => Some(Role::ProjectManager),
            "general_contractor" => Some(Role::GeneralContractor),
            "subcontractor" => Some(Role::Subcontractor),
            "trade_specialist" => Some(Role::TradeSpecialist),
            "viewer" => Some(Role::Viewer),
            "client" => Some(Role::Client),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| RoleError::Unrecognized(s.to_string()))
    }
}
