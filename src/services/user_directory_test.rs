#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::services::user_directory::{
        admin_users, end_users, load, paginate, stats, PageRequest, UserFilters,
    };
    use crate::types::user::{UserRecord, VerificationStatus};

    fn user(name: &str, email: &str, role: &str, active: bool, verification: VerificationStatus) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            full_name: name.to_string(),
            email: email.to_string(),
            role_code: role.to_string(),
            is_active: active,
            verification_status: verification,
            created_at: Utc::now(),
            last_login_at: None,
        }
    }

    fn sample_users() -> Vec<UserRecord> {
        vec![
            user("Ada Mason", "ada@site.test", "general_contractor", true, VerificationStatus::Verified),
            user("Ben Ortiz", "ben@site.test", "subcontractor", true, VerificationStatus::Pending),
            user("Cleo Vance", "cleo@site.test", "viewer", false, VerificationStatus::Unverified),
            user("Drew Shah", "drew@site.test", "admin", true, VerificationStatus::Verified),
            user("Elif Kaya", "elif@site.test", "finance_manager", true, VerificationStatus::Verified),
            user("Finn Doyle", "finn@site.test", "crew_lead", true, VerificationStatus::Rejected),
        ]
    }

    #[test]
    fn load_applies_filters_before_paginating() {
        let users = sample_users();
        let filters = UserFilters { active: Some(true), ..Default::default() };
        let page = load(&users, &filters, &PageRequest { page: 1, per_page: 3 });

        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 3);
        assert!(page.items.iter().all(|u| u.is_active));
    }

    #[test]
    fn role_filter_compares_codes_case_insensitively() {
        let users = sample_users();
        let filters = UserFilters { role: Some("Subcontractor".to_string()), ..Default::default() };
        let page = load(&users, &filters, &PageRequest::default());

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].full_name, "Ben Ortiz");
    }

    #[test]
    fn search_matches_name_email_and_role_label() {
        let users = sample_users();

        let by_name = load(
            &users,
            &UserFilters { search: Some("cleo".to_string()), ..Default::default() },
            &PageRequest::default(),
        );
        assert_eq!(by_name.total, 1);

        let by_email = load(
            &users,
            &UserFilters { search: Some("ben@site".to_string()), ..Default::default() },
            &PageRequest::default(),
        );
        assert_eq!(by_email.total, 1);

        // "General Contractor" is the display label, not the code
        let by_label = load(
            &users,
            &UserFilters { search: Some("general contractor".to_string()), ..Default::default() },
            &PageRequest::default(),
        );
        assert_eq!(by_label.total, 1);
        assert_eq!(by_label.items[0].full_name, "Ada Mason");
    }

    #[test]
    fn verification_filter_selects_exact_status() {
        let users = sample_users();
        let filters =
            UserFilters { verification: Some(VerificationStatus::Pending), ..Default::default() };
        let page = load(&users, &filters, &PageRequest::default());

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].full_name, "Ben Ortiz");
    }

    #[test]
    fn pagination_clamps_and_handles_out_of_range_pages() {
        let items: Vec<u32> = (0..10).collect();

        let page = paginate(items.clone(), &PageRequest { page: 0, per_page: 0 });
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.items, vec![0]);

        let past_end = paginate(items.clone(), &PageRequest { page: 4, per_page: 4 });
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 10);
        assert_eq!(past_end.total_pages, 3);

        let last = paginate(items, &PageRequest { page: 3, per_page: 4 });
        assert_eq!(last.items, vec![8, 9]);
    }

    #[test]
    fn empty_list_still_reports_one_page() {
        let page = paginate(Vec::<u32>::new(), &PageRequest::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn directory_splits_end_users_from_admin_tier() {
        let users = sample_users();

        let end = end_users(&users);
        let admins = admin_users(&users);

        assert_eq!(end.len(), 4);
        assert_eq!(admins.len(), 2);
        // Unrecognized role codes stay in the end-user list
        assert!(end.iter().any(|u| u.role_code == "crew_lead"));
    }

    #[test]
    fn stats_cover_end_users_only() {
        let users = sample_users();
        let stats = stats(&users);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.suspended, 1);
        // Pending review means pending or unverified
        assert_eq!(stats.pending_verification, 2);
    }
}
