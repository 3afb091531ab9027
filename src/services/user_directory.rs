use serde::{Deserialize, Serialize};

use crate::types::user::{UserRecord, VerificationStatus};

/// Filters applied to the console user list
///
/// All fields are optional and combine with AND. `search` matches
/// case-insensitively against full name, email, and role label.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilters {
    pub role: Option<String>,
    pub active: Option<bool>,
    pub verification: Option<VerificationStatus>,
    pub search: Option<String>,
}

/// One page of a list view, 1-based
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, per_page: 50 }
    }
}

/// A page of results plus the totals the console pager needs
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Aggregate counts shown on the users dashboard
///
/// Computed over end users only; admin-tier accounts are managed on a
/// separate screen and stay out of these numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: u64,
    pub active: u64,
    pub suspended: u64,
    pub pending_verification: u64,
}

/// Load one page of the user list: filter, then paginate
///
/// This is the whole list-view contract: every refetch is an explicit
/// `load` with the current filters and page, never an ambient side
/// effect of state changes.
pub fn load(users: &[UserRecord], filters: &UserFilters, page: &PageRequest) -> Page<UserRecord> {
    let filtered: Vec<UserRecord> =
        users.iter().filter(|user| matches(user, filters)).cloned().collect();
    paginate(filtered, page)
}

/// Slice items into the requested page
///
/// Page and per-page are clamped to at least 1. `total_pages` is at
/// least 1 even for an empty list; pages past the end come back empty.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let per_page = request.per_page.max(1);
    let page = request.page.max(1);
    let total = items.len() as u64;
    let total_pages = (total.div_ceil(per_page as u64)).max(1) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let items: Vec<T> = if start >= items.len() {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(per_page as usize).collect()
    };

    Page { items, page, per_page, total, total_pages }
}

/// End users: everyone whose role is not admin-tier
///
/// Unrecognized role codes land here too; they are not administrative.
pub fn end_users(users: &[UserRecord]) -> Vec<&UserRecord> {
    users.iter().filter(|user| !user.is_administrative()).collect()
}

/// Admin-tier accounts, managed on their own screen
pub fn admin_users(users: &[UserRecord]) -> Vec<&UserRecord> {
    users.iter().filter(|user| user.is_administrative()).collect()
}

/// Dashboard counts over end users
pub fn stats(users: &[UserRecord]) -> DirectoryStats {
    let end_users = end_users(users);
    DirectoryStats {
        total: end_users.len() as u64,
        active: end_users.iter().filter(|u| u.is_active).count() as u64,
        suspended: end_users.iter().filter(|u| !u.is_active).count() as u64,
        pending_verification: end_users
            .iter()
            .filter(|u| u.verification_status.is_pending_review())
            .count() as u64,
    }
}

fn matches(user: &UserRecord, filters: &UserFilters) -> bool {
    if let Some(role) = &filters.role {
        if !user.role_code.eq_ignore_ascii_case(role.trim()) {
            return false;
        }
    }

    if let Some(active) = filters.active {
        if user.is_active != active {
            return false;
        }
    }

    if let Some(verification) = filters.verification {
        if user.verification_status != verification {
            return false;
        }
    }

    if let Some(query) = &filters.search {
        let query = query.trim().to_ascii_lowercase();
        if !query.is_empty() {
            let label = user
                .role()
                .map(|role| role.label().to_ascii_lowercase())
                .unwrap_or_default();
            let hit = user.full_name.to_ascii_lowercase().contains(&query)
                || user.email.to_ascii_lowercase().contains(&query)
                || label.contains(&query);
            if !hit {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
#[path = "user_directory_test.rs"]
mod user_directory_test;
