use serde::{Deserialize, Serialize};

use crate::conversation::ConversationId;
use crate::message::MessageId;
use crate::user::User;

/// Events emitted by the services.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// The chat session accepted a send or upload; input controls should
    /// be disabled until `TurnFinished`
    TurnPending,

    /// The turn is bound to a conversation and its user message follows
    TurnStarted { conversation_id: ConversationId },

    /// A message landed in a conversation
    MessageAppended {
        conversation_id: ConversationId,
        message_id: MessageId,
    },

    /// The chat turn finished (successfully or not)
    TurnFinished,

    /// The signed-in user changed
    AuthChanged { user: Option<User> },

    /// A sign-in or sign-up attempt started
    AuthStarted,

    /// A sign-in or sign-up attempt finished (successfully or not)
    AuthFinished,

    /// The stored API key was saved, removed or loaded
    CredentialChanged { configured: bool },

    /// The AI-mode workspace started or stopped processing
    WorkspaceBusy { busy: bool },

    /// The AI-mode workspace produced output
    WorkspaceOutput { text: String },

    /// A transient, user-facing notification
    Notify(Notification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Destructive,
}

/// A toast-style notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }

    pub fn api_key_required() -> Self {
        Self::destructive(
            "API Key Required",
            "Please add your Gemini API key in Settings first.",
        )
    }
}
