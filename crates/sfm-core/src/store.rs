//! Conversation store — the ordered list of conversations (newest first)
//! and the active-conversation pointer.
//!
//! All mutations are synchronous and complete before the next UI event is
//! processed, so the store needs no synchronization of its own.

use sfm_types::{
    conversation::{Conversation, ConversationId, ConversationSummary},
    message::{Author, Message, MessageId},
    AppError, Result,
};

#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    active: Option<ConversationId>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty conversation at the front and make it active.
    pub fn create_conversation(&mut self) -> ConversationId {
        let conversation = Conversation::new();
        let id = conversation.id();
        self.conversations.insert(0, conversation);
        self.active = Some(id);
        log::debug!("Created conversation {}", id);
        id
    }

    /// Return the active conversation, creating one if none is active.
    pub fn ensure_active(&mut self) -> ConversationId {
        match self.active {
            Some(id) => id,
            None => self.create_conversation(),
        }
    }

    /// Append to the active conversation.
    ///
    /// When no conversation is active one is created first, so sending a
    /// message can materialize a conversation as a side effect.
    pub fn append_message(&mut self, content: &str, is_user: bool) -> MessageId {
        let id = self.ensure_active();
        let message = Message::new(content, Author::from_is_user(is_user));
        let message_id = message.id();
        // The active pointer only ever names a stored conversation
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id() == id) {
            conversation.push(message);
        }
        message_id
    }

    /// Append to a specific conversation, regardless of which one is active.
    pub fn append_to(
        &mut self,
        conversation_id: ConversationId,
        content: &str,
        author: Author,
    ) -> Result<MessageId> {
        self.conversations
            .iter_mut()
            .find(|c| c.id() == conversation_id)
            .map(|c| c.push(Message::new(content, author)))
            .ok_or_else(|| AppError::UnknownConversation(conversation_id.to_string()))
    }

    /// Point the active reference at `id`.
    ///
    /// Unknown ids are ignored: the active pointer is left as it was and
    /// `false` is returned.
    pub fn select_conversation(&mut self, id: ConversationId) -> bool {
        if self.get(id).is_some() {
            self.active = Some(id);
            true
        } else {
            log::warn!("Ignoring selection of unknown conversation {}", id);
            false
        }
    }

    pub fn active_id(&self) -> Option<ConversationId> {
        self.active
    }

    pub fn active(&self) -> Option<&Conversation> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    /// Conversations, newest first
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.conversations.iter().map(Conversation::summary).collect()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
