#[cfg(test)]
mod tests {
    use crate::core::cache::{ItemsCache, STALE_TIME_MS};
    use crate::core::config::api_url;
    use crate::core::error::{
        ApiError, PASSWORD_MISMATCH_MESSAGE, login_failure_message, signup_failure_message,
    };
    use crate::core::models::{
        Credentials, EMPTY_FIELDS_MESSAGE, Item, ItemDraft, format_timestamp, try_format_timestamp,
    };

    fn item(id: i64) -> Item {
        Item {
            id,
            name: format!("item-{id}"),
            description: "a description".to_string(),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            updated_at: "2024-01-15T10:30:00Z".to_string(),
        }
    }

    #[test]
    fn test_login_message_for_unknown_user() {
        assert_eq!(
            login_failure_message(&ApiError::Status(404)),
            "User not found. Please check your username."
        );
    }

    #[test]
    fn test_login_message_for_bad_password() {
        assert_eq!(
            login_failure_message(&ApiError::Status(401)),
            "Invalid password. Please try again."
        );
    }

    #[test]
    fn test_login_message_for_other_statuses() {
        for status in [400, 403, 422, 500, 503] {
            assert_eq!(
                login_failure_message(&ApiError::Status(status)),
                "An unexpected error occurred. Please try again."
            );
        }
    }

    #[test]
    fn test_login_message_for_network_failure() {
        assert_eq!(
            login_failure_message(&ApiError::Network("connection refused".to_string())),
            "Network error. Please check your connection."
        );
    }

    #[test]
    fn test_signup_message_for_taken_username() {
        assert_eq!(
            signup_failure_message(&ApiError::Status(400)),
            "Username already exists."
        );
    }

    #[test]
    fn test_signup_message_for_server_error() {
        assert_eq!(
            signup_failure_message(&ApiError::Status(500)),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn test_signup_message_for_other_statuses() {
        assert_eq!(
            signup_failure_message(&ApiError::Status(404)),
            "An unexpected error occurred. Please try again."
        );
        assert_eq!(
            signup_failure_message(&ApiError::Network("timed out".to_string())),
            "Network error. Please check your connection."
        );
    }

    #[test]
    fn test_password_mismatch_message() {
        assert_eq!(
            PASSWORD_MISMATCH_MESSAGE,
            "Passwords do not match. Please try again."
        );
    }

    #[test]
    fn test_api_error_status_accessor() {
        assert_eq!(ApiError::Status(401).status(), Some(401));
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn test_draft_validation_accepts_filled_fields() {
        let draft = ItemDraft {
            id: None,
            name: "Groceries".to_string(),
            description: "Milk and eggs".to_string(),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_validation_rejects_empty_name() {
        let draft = ItemDraft {
            id: None,
            name: String::new(),
            description: "something".to_string(),
        };
        assert_eq!(draft.validate(), Err(EMPTY_FIELDS_MESSAGE));
    }

    #[test]
    fn test_draft_validation_rejects_whitespace_only_description() {
        let draft = ItemDraft {
            id: Some(3),
            name: "Groceries".to_string(),
            description: "   \t ".to_string(),
        };
        assert_eq!(
            draft.validate(),
            Err("Name and description can't be empty.")
        );
    }

    #[test]
    fn test_default_draft_is_create_mode() {
        let draft = ItemDraft::default();
        assert_eq!(draft.id, None);
        assert!(!draft.is_editing());
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
    }

    #[test]
    fn test_draft_for_edit_carries_item_fields() {
        let source = item(42);
        let draft = ItemDraft::for_edit(&source);
        assert_eq!(draft.id, Some(42));
        assert!(draft.is_editing());
        assert_eq!(draft.name, source.name);
        assert_eq!(draft.description, source.description);
    }

    #[test]
    fn test_cache_is_fresh_within_window() {
        let cache = ItemsCache::new(vec![item(1)], 1_000.0);
        assert!(cache.is_fresh(1_000.0));
        assert!(cache.is_fresh(1_000.0 + STALE_TIME_MS - 1.0));
    }

    #[test]
    fn test_cache_is_stale_at_window_boundary() {
        let cache = ItemsCache::new(vec![item(1)], 1_000.0);
        assert!(!cache.is_fresh(1_000.0 + STALE_TIME_MS));
        assert!(!cache.is_fresh(1_000.0 + STALE_TIME_MS * 2.0));
    }

    #[test]
    fn test_stale_time_is_five_minutes() {
        assert_eq!(STALE_TIME_MS, 300_000.0);
    }

    #[test]
    fn test_item_deserializes_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "name": "Notebook",
            "description": "A5, dotted",
            "createdAt": "2024-01-15T10:30:00Z",
            "updatedAt": "2024-02-01T08:00:00Z",
            "user": {"username": "alice"}
        }"#;
        let parsed: Item = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.created_at, "2024-01-15T10:30:00Z");
        assert_eq!(parsed.updated_at, "2024-02-01T08:00:00Z");
    }

    #[test]
    fn test_item_serializes_camel_case_fields() {
        let serialized = serde_json::to_string(&item(1)).unwrap();
        assert!(serialized.contains("\"createdAt\""));
        assert!(serialized.contains("\"updatedAt\""));
    }

    #[test]
    fn test_credentials_serialize_plain_fields() {
        let credentials = Credentials {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let serialized = serde_json::to_string(&credentials).unwrap();
        assert!(serialized.contains("\"username\":\"alice\""));
        assert!(serialized.contains("\"password\":\"secret\""));
    }

    #[test]
    fn test_format_timestamp_renders_rfc3339() {
        assert_eq!(
            format_timestamp("2024-01-15T10:30:00Z"),
            "Jan 15, 2024, 10:30 AM"
        );
        assert_eq!(
            format_timestamp("2024-03-05T21:05:00+00:00"),
            "Mar 5, 2024, 9:05 PM"
        );
    }

    #[test]
    fn test_format_timestamp_falls_back_to_unknown() {
        assert_eq!(format_timestamp("not a date"), "Unknown");
        assert_eq!(format_timestamp(""), "Unknown");
        assert_eq!(try_format_timestamp("not a date"), None);
    }

    #[test]
    fn test_api_url_joins_default_base() {
        assert_eq!(api_url("/auth/login"), "/api/auth/login");
        assert_eq!(api_url("/items?join=user"), "/api/items?join=user");
    }
}
