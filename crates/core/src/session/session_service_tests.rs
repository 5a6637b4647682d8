//! Tests for the session user model and gating.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::session::{
        AccessDecision, AccessRequirement, MemorySessionStore, SessionService,
        SessionServiceTrait, SessionStore, SessionUser, SESSION_USER_KEY,
    };
    use mimi_api_client::User;

    fn service_with(raw: Option<&str>) -> SessionService {
        let store = MemorySessionStore::new();
        if let Some(raw) = raw {
            store.set(SESSION_USER_KEY, raw.to_string());
        }
        SessionService::new(Arc::new(store))
    }

    // ==================== SessionUser shape tolerance ====================

    #[test]
    fn test_effective_id_prefers_id() {
        let user: SessionUser =
            serde_json::from_str(r#"{"id": 9, "userId": 4}"#).unwrap();
        assert_eq!(user.effective_id(), Some(9));
    }

    #[test]
    fn test_effective_id_falls_back_to_user_id() {
        let user: SessionUser = serde_json::from_str(r#"{"userId": 4}"#).unwrap();
        assert_eq!(user.effective_id(), Some(4));
        let user: SessionUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user.effective_id(), None);
    }

    #[test]
    fn test_primary_role_prefers_role_field() {
        let user: SessionUser =
            serde_json::from_str(r#"{"role": "ADMIN", "roles": ["SELLER"]}"#).unwrap();
        assert_eq!(user.primary_role(), Some("ADMIN"));
        assert!(user.is_admin());
    }

    #[test]
    fn test_primary_role_falls_back_to_roles_head() {
        let user: SessionUser =
            serde_json::from_str(r#"{"roles": ["ADMIN", "SELLER"]}"#).unwrap();
        assert_eq!(user.primary_role(), Some("ADMIN"));
        let user: SessionUser = serde_json::from_str("{}").unwrap();
        assert_eq!(user.primary_role(), None);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"id": 9, "fullName": "Duy Anh", "avatarUrl": "9.png"}"#;
        let user: SessionUser = serde_json::from_str(raw).unwrap();
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["fullName"], "Duy Anh");
        assert_eq!(back["avatarUrl"], "9.png");
    }

    #[test]
    fn test_from_profile() {
        let profile = User {
            id: 9,
            username: Some("duyanh".to_string()),
            email: None,
            full_name: Some("Duy Anh".to_string()),
            birthday: None,
            phone_number: None,
            address: None,
            role: Some("SELLER".to_string()),
            avatar_url: None,
        };
        let user = SessionUser::from_profile(&profile).unwrap();
        assert_eq!(user.effective_id(), Some(9));
        assert_eq!(user.primary_role(), Some("SELLER"));
        assert_eq!(user.extra.get("fullName").and_then(|v| v.as_str()), Some("Duy Anh"));
    }

    // ==================== Store round trip ====================

    #[test]
    fn test_store_and_read_back() {
        let service = service_with(None);
        assert!(service.current_user().is_none());

        let user: SessionUser = serde_json::from_str(r#"{"id": 9, "role": "SELLER"}"#).unwrap();
        service.store_user(&user).unwrap();
        let read = service.current_user().unwrap();
        assert_eq!(read.effective_id(), Some(9));

        service.clear();
        assert!(service.current_user().is_none());
    }

    // ==================== Gating ====================

    #[test]
    fn test_no_session_redirects_to_login() {
        let service = service_with(None);
        assert_eq!(
            service.check_access(AccessRequirement::SignedIn),
            AccessDecision::RedirectToLogin
        );
        assert_eq!(
            service.check_access(AccessRequirement::Admin),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_corrupt_blob_redirects_to_login() {
        let service = service_with(Some("{not json"));
        assert!(service.current_user().is_none());
        assert_eq!(
            service.check_access(AccessRequirement::SignedIn),
            AccessDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_signed_in_user_is_granted() {
        let service = service_with(Some(r#"{"id": 9}"#));
        assert_eq!(
            service.check_access(AccessRequirement::SignedIn),
            AccessDecision::Granted
        );
    }

    #[test]
    fn test_admin_gate() {
        let admin = service_with(Some(r#"{"id": 1, "role": "ADMIN"}"#));
        assert_eq!(
            admin.check_access(AccessRequirement::Admin),
            AccessDecision::Granted
        );

        let seller = service_with(Some(r#"{"id": 2, "role": "SELLER"}"#));
        assert_eq!(
            seller.check_access(AccessRequirement::Admin),
            AccessDecision::RedirectToHome
        );

        let roles_only = service_with(Some(r#"{"id": 3, "roles": ["ADMIN"]}"#));
        assert_eq!(
            roles_only.check_access(AccessRequirement::Admin),
            AccessDecision::Granted
        );
    }
}
