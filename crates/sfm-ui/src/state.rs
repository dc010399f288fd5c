//! UI-level state that drives rendering.
//! Form buffers and flags owned by the view, plus a projection of service
//! state updated each frame by draining the EventBus. Conversations are
//! read straight from the store and are not copied here.

use sfm_types::event::{AppEvent, Notification};
use sfm_types::mode::Complexity;
use sfm_types::user::User;
use crate::route::Route;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 5_000;

pub type ToastId = u64;

/// State visible to UI panels
pub struct UiState {
    pub route: Route,
    /// Signed-in user, as last reported by the auth service
    pub user: Option<User>,
    /// Whether the stored session has been checked yet
    pub auth_resolved: bool,
    /// Whether a Gemini API key is stored
    pub has_api_key: bool,
    pub chat: ChatView,
    pub settings: SettingsForm,
    pub login: LoginForm,
    pub signup: SignUpForm,
    pub contact: ContactForm,
    pub workspace: WorkspaceView,
    /// Index of the expanded FAQ entry on the contact page
    pub open_faq: Option<usize>,
    pub toasts: Vec<Toast>,
    next_toast_id: ToastId,
    /// Toasts pushed since the app last scheduled expiry timers
    new_toasts: Vec<ToastId>,
}

#[derive(Default)]
pub struct ChatView {
    pub input: String,
    /// A turn is waiting on the model
    pub thinking: bool,
}

#[derive(Default)]
pub struct SettingsForm {
    pub api_key: String,
    pub show_key: bool,
}

#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub submitting: bool,
}

#[derive(Default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub submitting: bool,
}

#[derive(Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// All fields are required and the email must look like one
    pub fn validate(&self) -> Result<(), String> {
        let missing = [
            ("Name", &self.name),
            ("Email", &self.email),
            ("Subject", &self.subject),
            ("Message", &self.message),
        ]
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label);

        if let Some(label) = missing {
            return Err(format!("{} is required.", label));
        }
        if !self.email.contains('@') {
            return Err("Please enter a valid email address.".to_string());
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTab {
    #[default]
    Formatted,
    Raw,
}

#[derive(Default)]
pub struct WorkspaceView {
    pub complexity: Complexity,
    pub input: String,
    pub output: String,
    pub processing: bool,
    pub tab: OutputTab,
}

impl WorkspaceView {
    /// Character count shown under the input
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Leaving the workspace discards input and output
    pub fn reset(&mut self) {
        *self = Self {
            complexity: self.complexity,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

impl UiState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            user: None,
            auth_resolved: false,
            has_api_key: false,
            chat: ChatView::default(),
            settings: SettingsForm::default(),
            login: LoginForm::default(),
            signup: SignUpForm::default(),
            contact: ContactForm::default(),
            workspace: WorkspaceView::default(),
            open_faq: None,
            toasts: Vec::new(),
            next_toast_id: 0,
            new_toasts: Vec::new(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<AppEvent>) {
        for event in events {
            match event {
                AppEvent::TurnPending | AppEvent::TurnStarted { .. } => {
                    self.chat.thinking = true;
                }
                AppEvent::MessageAppended { .. } => {}
                AppEvent::TurnFinished => {
                    self.chat.thinking = false;
                }
                AppEvent::AuthChanged { user } => {
                    self.auth_resolved = true;
                    if user.is_some() {
                        self.login = LoginForm::default();
                        self.signup = SignUpForm::default();
                        if matches!(self.route, Route::Login | Route::SignUp) {
                            self.route = Route::Chat;
                        }
                    } else if self.route.requires_auth() && self.user.is_some() {
                        self.route = Route::Home;
                    }
                    self.user = user;
                }
                AppEvent::AuthStarted => {}
                AppEvent::AuthFinished => {
                    self.login.submitting = false;
                    self.signup.submitting = false;
                }
                AppEvent::CredentialChanged { configured } => {
                    self.has_api_key = configured;
                    if !configured {
                        self.settings.api_key.clear();
                    }
                }
                AppEvent::WorkspaceBusy { busy } => {
                    self.workspace.processing = busy;
                }
                AppEvent::WorkspaceOutput { text } => {
                    self.workspace.output = text;
                    self.workspace.tab = OutputTab::Formatted;
                }
                AppEvent::Notify(notification) => {
                    self.push_toast(notification);
                }
            }
        }
    }

    /// Overlay the services' busy flags on the event projection. A call
    /// that is pending keeps its controls disabled even if its start
    /// event has not been drained yet.
    pub fn sync_busy(&mut self, chat_busy: bool, workspace_busy: bool) {
        self.chat.thinking |= chat_busy;
        self.workspace.processing |= workspace_busy;
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        if matches!(self.route, Route::Workspace(_)) {
            self.workspace.reset();
        }
        log::debug!("Navigate {} -> {}", self.route.path(), route.path());
        self.route = route;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Chat controls are disabled while a turn is pending or without a key
    pub fn chat_enabled(&self) -> bool {
        self.has_api_key && !self.chat.thinking
    }

    /// Take the chat input for sending. `None` when it is blank or the
    /// controls are disabled; the buffer is kept in that case.
    pub fn take_chat_input(&mut self) -> Option<String> {
        if !self.chat_enabled() || self.chat.input.trim().is_empty() {
            return None;
        }
        let text = self.chat.input.trim().to_string();
        self.chat.input.clear();
        Some(text)
    }

    pub fn push_toast(&mut self, notification: Notification) -> ToastId {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, notification });
        self.new_toasts.push(id);
        id
    }

    pub fn dismiss_toast(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Toasts that still need an expiry timer
    pub fn take_new_toasts(&mut self) -> Vec<ToastId> {
        std::mem::take(&mut self.new_toasts)
    }

    /// Validate and "send" the contact form. There is no backend; a valid
    /// form just produces a confirmation and is cleared.
    pub fn submit_contact(&mut self) -> bool {
        match self.contact.validate() {
            Ok(()) => {
                log::info!("Contact form submitted: {}", self.contact.subject.trim());
                self.push_toast(Notification::info(
                    "Message Sent!",
                    "Thank you for your message. We'll get back to you soon.",
                ));
                self.contact.clear();
                true
            }
            Err(reason) => {
                self.push_toast(Notification::destructive("Missing Information", reason));
                false
            }
        }
    }

    pub fn toggle_faq(&mut self, index: usize) {
        self.open_faq = if self.open_faq == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
