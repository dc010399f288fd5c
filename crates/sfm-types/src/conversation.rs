use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::{Message, MessageId};

/// Title every conversation starts with
pub const PLACEHOLDER_TITLE: &str = "New Chat";

/// Maximum length of a derived title in characters, marker included
pub const TITLE_MAX_CHARS: usize = 30;

/// Appended to a derived title when the source content was cut
pub const TRUNCATION_MARKER: &str = "...";

/// Opaque conversation identifier, unique within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationId(Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A conversation: an append-only log of messages plus a derived title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    title: String,
    messages: Vec<Message>,
    created_at: DateTime<Utc>,
    /// Set once the title has been derived from a user message
    #[serde(default)]
    titled: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            title: PLACEHOLDER_TITLE.to_string(),
            messages: Vec::new(),
            created_at: Utc::now(),
            titled: false,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_placeholder_title(&self) -> bool {
        !self.titled
    }

    /// Append a message to the log. The first user-authored message
    /// replaces the placeholder title; later messages never touch it.
    pub fn push(&mut self, message: Message) -> MessageId {
        if !self.titled && message.is_user() {
            self.title = derive_title(message.content());
            self.titled = true;
        }
        let id = message.id();
        self.messages.push(message);
        id
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            id: self.id,
            title: self.title.clone(),
            message_count: self.messages.len(),
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Sidebar projection of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: ConversationId,
    pub title: String,
    pub message_count: usize,
}

/// Build a title from message content, bounded to `TITLE_MAX_CHARS`
/// characters with `TRUNCATION_MARKER` iff the content was longer.
pub fn derive_title(content: &str) -> String {
    if content.chars().count() <= TITLE_MAX_CHARS {
        return content.to_string();
    }
    let keep = TITLE_MAX_CHARS - TRUNCATION_MARKER.chars().count();
    let mut title: String = content.chars().take(keep).collect();
    title.push_str(TRUNCATION_MARKER);
    title
}
