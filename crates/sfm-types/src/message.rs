use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque message identifier, unique within a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn from_is_user(is_user: bool) -> Self {
        if is_user {
            Author::User
        } else {
            Author::Assistant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Author::User => "You",
            Author::Assistant => "Assistant",
        }
    }
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    content: String,
    author: Author,
    created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(content: impl Into<String>, author: Author) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            author,
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Author::User)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, Author::Assistant)
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
