#[cfg(test)]
mod tests {
    use crate::route::Route;
    use crate::state::*;
    use sfm_types::conversation::ConversationId;
    use sfm_types::event::{AppEvent, Notification};
    use sfm_types::mode::{AiMode, Complexity};
    use sfm_types::user::{User, UserMetadata};

    fn user() -> User {
        User {
            uid: "u1".to_string(),
            email: Some("a@b.com".to_string()),
            metadata: UserMetadata::default(),
            id_token: String::new(),
            refresh_token: String::new(),
        }
    }

    // ─── Route Tests ─────────────────────────────────────────

    #[test]
    fn test_route_paths_roundtrip() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Chat,
            Route::Settings,
            Route::Instructions,
            Route::Contact,
            Route::Login,
            Route::SignUp,
            Route::Workspace(AiMode::Research),
            Route::Workspace(AiMode::Auto),
        ];
        for route in routes {
            assert_eq!(Route::from_hash(&format!("#{}", route.path())), route);
        }
    }

    #[test]
    fn test_route_from_hash_lenient() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/chat/"), Route::Chat);
        assert_eq!(Route::from_hash("settings"), Route::Settings);
        assert_eq!(Route::from_hash("#/nowhere"), Route::Home);
        assert_eq!(
            Route::from_hash("#/workspace/unknown"),
            Route::Workspace(AiMode::Auto)
        );
    }

    #[test]
    fn test_route_requires_auth() {
        assert!(Route::Chat.requires_auth());
        assert!(Route::Settings.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Workspace(AiMode::Document).requires_auth());
    }

    #[test]
    fn test_nav_links_hide_chat_when_signed_out() {
        assert!(!Route::nav_links(false).contains(&Route::Chat));
        let links = Route::nav_links(true);
        assert_eq!(links.len(), 5);
        assert_eq!(links[2], Route::Chat);
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(Route::About);
        assert_eq!(state.route, Route::About);
        assert!(state.user.is_none());
        assert!(!state.auth_resolved);
        assert!(!state.has_api_key);
        assert!(!state.chat.thinking);
        assert!(state.toasts.is_empty());
        assert!(!state.chat_enabled());
    }

    #[test]
    fn test_ui_state_turn_events() {
        let mut state = UiState::default();
        state.process_events(vec![AppEvent::TurnStarted {
            conversation_id: ConversationId::new(),
        }]);
        assert!(state.chat.thinking);

        state.process_events(vec![AppEvent::TurnFinished]);
        assert!(!state.chat.thinking);
    }

    #[test]
    fn test_pending_upload_disables_chat_controls() {
        let mut state = UiState::new(Route::Chat);
        state.has_api_key = true;
        state.process_events(vec![AppEvent::TurnPending]);
        assert!(!state.chat_enabled());

        state.chat.input = "typed meanwhile".to_string();
        assert_eq!(state.take_chat_input(), None);
        assert_eq!(state.chat.input, "typed meanwhile");

        state.process_events(vec![AppEvent::TurnFinished]);
        assert!(state.chat_enabled());
    }

    #[test]
    fn test_sync_busy_overlays_service_flags() {
        let mut state = UiState::new(Route::Chat);
        state.has_api_key = true;
        state.sync_busy(true, false);
        assert!(!state.chat_enabled());
        assert!(!state.workspace.processing);

        state.process_events(vec![AppEvent::TurnFinished]);
        state.sync_busy(false, true);
        assert!(state.chat_enabled());
        assert!(state.workspace.processing);
    }

    #[test]
    fn test_ui_state_sign_in_leaves_login_page() {
        let mut state = UiState::new(Route::Login);
        state.login.email = "a@b.com".to_string();
        state.login.password = "secret".to_string();
        state.login.submitting = true;

        state.process_events(vec![
            AppEvent::AuthChanged { user: Some(user()) },
            AppEvent::AuthFinished,
        ]);
        assert!(state.is_signed_in());
        assert!(state.auth_resolved);
        assert_eq!(state.route, Route::Chat);
        assert!(state.login.password.is_empty());
        assert!(!state.login.submitting);
    }

    #[test]
    fn test_ui_state_failed_sign_in_keeps_form() {
        let mut state = UiState::new(Route::Login);
        state.login.email = "a@b.com".to_string();
        state.login.submitting = true;

        state.process_events(vec![
            AppEvent::Notify(Notification::destructive("Sign In Failed", "Incorrect email or password.")),
            AppEvent::AuthFinished,
        ]);
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.login.email, "a@b.com");
        assert!(!state.login.submitting);
        assert_eq!(state.toasts.len(), 1);
    }

    #[test]
    fn test_ui_state_sign_out_leaves_protected_page() {
        let mut state = UiState::new(Route::Settings);
        state.process_events(vec![AppEvent::AuthChanged { user: Some(user()) }]);
        assert_eq!(state.route, Route::Settings);

        state.process_events(vec![AppEvent::AuthChanged { user: None }]);
        assert!(!state.is_signed_in());
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn test_ui_state_restore_without_session_keeps_route() {
        let mut state = UiState::new(Route::Chat);
        state.process_events(vec![AppEvent::AuthChanged { user: None }]);
        assert_eq!(state.route, Route::Chat);
        assert!(state.auth_resolved);
    }

    #[test]
    fn test_ui_state_credential_events() {
        let mut state = UiState::default();
        state.process_events(vec![AppEvent::CredentialChanged { configured: true }]);
        assert!(state.has_api_key);
        assert!(state.chat_enabled());

        state.settings.api_key = "AIza".to_string();
        state.process_events(vec![AppEvent::CredentialChanged { configured: false }]);
        assert!(!state.has_api_key);
        assert!(state.settings.api_key.is_empty());
    }

    #[test]
    fn test_take_chat_input() {
        let mut state = UiState::default();
        state.chat.input = "  hello  ".to_string();
        assert_eq!(state.take_chat_input(), None);

        state.has_api_key = true;
        assert_eq!(state.take_chat_input().as_deref(), Some("hello"));
        assert!(state.chat.input.is_empty());

        state.chat.input = "   ".to_string();
        assert_eq!(state.take_chat_input(), None);

        state.chat.input = "again".to_string();
        state.chat.thinking = true;
        assert_eq!(state.take_chat_input(), None);
        assert_eq!(state.chat.input, "again");
    }

    #[test]
    fn test_workspace_events() {
        let mut state = UiState::new(Route::Workspace(AiMode::Document));
        state.workspace.tab = OutputTab::Raw;
        state.process_events(vec![AppEvent::WorkspaceBusy { busy: true }]);
        assert!(state.workspace.processing);

        state.process_events(vec![
            AppEvent::WorkspaceOutput { text: "## Summary".to_string() },
            AppEvent::WorkspaceBusy { busy: false },
        ]);
        assert!(!state.workspace.processing);
        assert_eq!(state.workspace.output, "## Summary");
        assert_eq!(state.workspace.tab, OutputTab::Formatted);
    }

    #[test]
    fn test_leaving_workspace_resets_it() {
        let mut state = UiState::new(Route::Workspace(AiMode::Project));
        state.workspace.input = "tasks".to_string();
        state.workspace.output = "plan".to_string();
        state.workspace.complexity = Complexity::Expert;

        state.navigate(Route::Home);
        assert_eq!(state.route, Route::Home);
        assert!(state.workspace.input.is_empty());
        assert!(state.workspace.output.is_empty());
        assert_eq!(state.workspace.complexity, Complexity::Expert);
    }

    #[test]
    fn test_workspace_char_count_unicode() {
        let mut view = WorkspaceView::default();
        view.input = "héllo ✓".to_string();
        assert_eq!(view.char_count(), 7);
    }

    // ─── Toast Tests ─────────────────────────────────────────

    #[test]
    fn test_toasts_push_take_dismiss() {
        let mut state = UiState::default();
        let a = state.push_toast(Notification::info("One", ""));
        state.process_events(vec![AppEvent::Notify(Notification::info("Two", ""))]);
        assert_eq!(state.toasts.len(), 2);

        let pending = state.take_new_toasts();
        assert_eq!(pending.len(), 2);
        assert!(state.take_new_toasts().is_empty());

        state.dismiss_toast(a);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].notification.title, "Two");
    }

    // ─── Contact Form Tests ──────────────────────────────────

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Great app".to_string(),
        }
    }

    #[test]
    fn test_contact_validation() {
        assert!(filled_form().validate().is_ok());

        let mut form = filled_form();
        form.subject = "  ".to_string();
        assert_eq!(form.validate().unwrap_err(), "Subject is required.");

        let mut form = filled_form();
        form.email = "ada".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_submit_contact_clears_form() {
        let mut state = UiState::default();
        state.contact = filled_form();
        assert!(state.submit_contact());
        assert!(state.contact.name.is_empty());
        assert_eq!(state.toasts[0].notification.title, "Message Sent!");
        assert!(!state.toasts[0].notification.is_destructive());
    }

    #[test]
    fn test_submit_contact_invalid_keeps_form() {
        let mut state = UiState::default();
        state.contact.name = "Ada".to_string();
        assert!(!state.submit_contact());
        assert_eq!(state.contact.name, "Ada");
        assert!(state.toasts[0].notification.is_destructive());
    }

    #[test]
    fn test_toggle_faq() {
        let mut state = UiState::default();
        state.toggle_faq(2);
        assert_eq!(state.open_faq, Some(2));
        state.toggle_faq(0);
        assert_eq!(state.open_faq, Some(0));
        state.toggle_faq(0);
        assert_eq!(state.open_faq, None);
    }
}
