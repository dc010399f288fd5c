#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::conversation::*;
    use crate::document::*;
    use crate::error::*;
    use crate::event::*;
    use crate::message::*;
    use crate::mode::*;
    use crate::user::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.author(), Author::User);
        assert!(msg.is_user());
        assert_eq!(msg.content(), "Hello");
    }

    #[test]
    fn test_message_assistant() {
        let msg = Message::assistant("I can help");
        assert_eq!(msg.author(), Author::Assistant);
        assert!(!msg.is_user());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_author_from_is_user() {
        assert_eq!(Author::from_is_user(true), Author::User);
        assert_eq!(Author::from_is_user(false), Author::Assistant);
    }

    #[test]
    fn test_author_serialization() {
        assert_eq!(serde_json::to_string(&Author::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Author::Assistant).unwrap(), r#""assistant""#);
    }

    // ─── Title Derivation Tests ──────────────────────────────

    #[test]
    fn test_derive_title_short_content_unchanged() {
        assert_eq!(derive_title("Hi"), "Hi");
    }

    #[test]
    fn test_derive_title_exactly_at_bound() {
        let content = "a".repeat(TITLE_MAX_CHARS);
        assert_eq!(derive_title(&content), content);
    }

    #[test]
    fn test_derive_title_truncates_with_marker() {
        let title = derive_title("Hello there, how are you today?");
        assert_eq!(title, "Hello there, how are you to...");
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn test_derive_title_counts_characters_not_bytes() {
        let content = "é".repeat(40);
        let title = derive_title(&content);
        assert_eq!(title.chars().count(), TITLE_MAX_CHARS);
        assert!(title.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_derive_title_empty() {
        assert_eq!(derive_title(""), "");
    }

    // ─── Conversation Tests ──────────────────────────────────

    #[test]
    fn test_conversation_new() {
        let conv = Conversation::new();
        assert_eq!(conv.title(), PLACEHOLDER_TITLE);
        assert!(conv.has_placeholder_title());
        assert!(conv.messages().is_empty());
    }

    #[test]
    fn test_conversation_first_user_message_sets_title() {
        let mut conv = Conversation::new();
        conv.push(Message::user("Plan my week"));
        assert_eq!(conv.title(), "Plan my week");
        assert!(!conv.has_placeholder_title());
    }

    #[test]
    fn test_conversation_assistant_message_keeps_placeholder() {
        let mut conv = Conversation::new();
        conv.push(Message::assistant("Welcome"));
        assert_eq!(conv.title(), PLACEHOLDER_TITLE);
        assert!(conv.has_placeholder_title());
    }

    #[test]
    fn test_conversation_title_derived_once() {
        let mut conv = Conversation::new();
        conv.push(Message::user("first"));
        conv.push(Message::user("second"));
        assert_eq!(conv.title(), "first");
    }

    #[test]
    fn test_conversation_title_derived_once_even_if_equal_to_placeholder() {
        let mut conv = Conversation::new();
        conv.push(Message::user(PLACEHOLDER_TITLE));
        conv.push(Message::user("something else"));
        assert_eq!(conv.title(), PLACEHOLDER_TITLE);
        assert!(!conv.has_placeholder_title());
    }

    #[test]
    fn test_conversation_push_returns_message_id() {
        let mut conv = Conversation::new();
        let msg = Message::user("x");
        let expected = msg.id();
        assert_eq!(conv.push(msg), expected);
    }

    #[test]
    fn test_conversation_summary() {
        let mut conv = Conversation::new();
        conv.push(Message::user("Hello"));
        conv.push(Message::assistant("Hi"));
        let summary = conv.summary();
        assert_eq!(summary.id, conv.id());
        assert_eq!(summary.title, "Hello");
        assert_eq!(summary.message_count, 2);
    }

    #[test]
    fn test_conversation_serialization_keeps_title_flag() {
        let mut conv = Conversation::new();
        conv.push(Message::user("Hello"));
        let json = serde_json::to_string(&conv).unwrap();
        let restored: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.title(), "Hello");
        assert!(!restored.has_placeholder_title());
        assert_eq!(restored.messages().len(), 1);
    }

    // ─── User Tests ──────────────────────────────────────────

    #[test]
    fn test_user_display_fallbacks() {
        let user = User {
            uid: "u1".to_string(),
            email: None,
            metadata: UserMetadata::default(),
            id_token: String::new(),
            refresh_token: String::new(),
        };
        assert_eq!(user.email_or_empty(), "");
        assert_eq!(user.creation_time_or_unknown(), "Unknown");
        assert_eq!(user.last_sign_in_or_unknown(), "Unknown");
    }

    #[test]
    fn test_user_token_not_serialized_when_empty() {
        let user = User {
            uid: "u1".to_string(),
            email: Some("a@b.c".to_string()),
            metadata: UserMetadata::default(),
            id_token: String::new(),
            refresh_token: String::new(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("id_token"));
        assert!(!json.contains("refresh_token"));
    }

    #[test]
    fn test_user_session_keeps_refresh_token() {
        let user = User {
            uid: "u1".to_string(),
            email: Some("a@b.c".to_string()),
            metadata: UserMetadata::default(),
            id_token: "short".to_string(),
            refresh_token: "long".to_string(),
        };
        let json = serde_json::to_vec(&user).unwrap();
        let restored: User = serde_json::from_slice(&json).unwrap();
        assert_eq!(restored.refresh_token, "long");

        let legacy: User =
            serde_json::from_str(r#"{"uid":"u1","email":null,"id_token":"short"}"#).unwrap();
        assert!(legacy.refresh_token.is_empty());
    }

    // ─── Mode Tests ──────────────────────────────────────────

    #[test]
    fn test_mode_slug_roundtrip() {
        for mode in [AiMode::Document, AiMode::Project, AiMode::Research, AiMode::Auto] {
            assert_eq!(AiMode::from_slug(mode.slug()), mode);
        }
    }

    #[test]
    fn test_mode_unknown_slug_is_auto() {
        assert_eq!(AiMode::from_slug("poetry"), AiMode::Auto);
    }

    #[test]
    fn test_mode_selectable_excludes_auto() {
        assert_eq!(AiMode::selectable().len(), 3);
        assert!(!AiMode::selectable().contains(&AiMode::Auto));
    }

    #[test]
    fn test_mode_prompt_contains_input_and_level() {
        let prompt = AiMode::Project.build_prompt(Complexity::Beginner, "  ship v2 by Friday  ");
        assert!(prompt.contains("ship v2 by Friday"));
        assert!(prompt.contains("beginner"));
        assert!(prompt.contains("role assignments"));
        assert!(prompt.ends_with("ship v2 by Friday"));
    }

    #[test]
    fn test_complexity_default_is_intermediate() {
        assert_eq!(Complexity::default(), Complexity::Intermediate);
        assert_eq!(Complexity::all().len(), 3);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_notification_constructors() {
        let n = Notification::info("Saved", "ok");
        assert!(!n.is_destructive());
        let n = Notification::api_key_required();
        assert!(n.is_destructive());
        assert_eq!(n.title, "API Key Required");
    }

    #[test]
    fn test_app_event_serialization() {
        let event = AppEvent::WorkspaceOutput { text: "## Summary".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("WorkspaceOutput"));
        assert!(json.contains("## Summary"));
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.gemini.model, "gemini-pro");
        assert_eq!(config.storage.credential_key, "gemini-api-key");
        assert_eq!(config.storage.backend, StorageBackendType::Auto);
        assert!(config.identity.token_base.starts_with("https://securetoken"));
    }

    #[test]
    fn test_gemini_generate_url() {
        let config = GeminiConfig {
            model: "gemini-pro".to_string(),
            api_base: "https://example.test/".to_string(),
        };
        let url = config.generate_url();
        assert_eq!(
            url,
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
        assert!(!url.contains("key="));
        assert_eq!(GEMINI_KEY_HEADER, "x-goog-api-key");
    }

    #[test]
    fn test_identity_endpoint() {
        let config = IdentityConfig {
            api_key: "fb".to_string(),
            api_base: "https://id.test/v1".to_string(),
            ..IdentityConfig::default()
        };
        assert_eq!(
            config.endpoint("signUp"),
            "https://id.test/v1/accounts:signUp?key=fb"
        );
    }

    #[test]
    fn test_identity_token_endpoint() {
        let config = IdentityConfig {
            api_key: "fb".to_string(),
            token_base: "https://token.test/v1/".to_string(),
            ..IdentityConfig::default()
        };
        assert_eq!(config.token_endpoint(), "https://token.test/v1/token?key=fb");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.gemini.model, config.gemini.model);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(AppError::MissingCredential.to_string(), "Gemini API key is required");
        assert_eq!(
            AppError::Generation("HTTP 403".to_string()).to_string(),
            "Generation error: HTTP 403"
        );
        assert_eq!(
            AppError::InvalidInput("empty".to_string()).to_string(),
            "Invalid input: empty"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: AppError = serde_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    // ─── Upload Tests ────────────────────────────────────────

    #[test]
    fn test_uploaded_file_pdf_by_mime() {
        let file = UploadedFile::new("report", PDF_MIME_TYPE, vec![1, 2, 3]);
        assert!(file.is_pdf());
    }

    #[test]
    fn test_uploaded_file_rejects_other_mime() {
        let file = UploadedFile::new("notes.pdf", "text/plain", Vec::new());
        assert!(!file.is_pdf());
    }

    #[test]
    fn test_uploaded_file_extension_fallback() {
        assert!(UploadedFile::new("Report.PDF", "", Vec::new()).is_pdf());
        assert!(!UploadedFile::new("report.docx", "", Vec::new()).is_pdf());
    }

    #[test]
    fn test_error_user_message_strips_prefix() {
        let err = AppError::Identity("Incorrect password.".to_string());
        assert_eq!(err.user_message(), "Incorrect password.");
        assert_eq!(AppError::Busy.user_message(), "Another request is still pending");
    }
}
