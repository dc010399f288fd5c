//! Chat session — one user action in, at most one assistant reply out.
//!
//! A turn:
//! 1. Claim the session (`TurnPending`), validate input and look up the
//!    API key (abort with a notification)
//! 2. Ensure a conversation is active and capture its id
//! 3. Append the user message
//! 4. Call the generative collaborator
//! 5. Append the reply, or the fixed fallback text if the call failed
//!
//! The store is borrowed only between awaits, never across one.

use std::cell::RefCell;
use std::rc::Rc;

use sfm_types::{
    conversation::ConversationId,
    document::UploadedFile,
    event::{AppEvent, Notification},
    message::{Author, MessageId},
    AppError, Result,
};
use crate::busy::{BusyFlag, BusyGuard};
use crate::credentials::CredentialStore;
use crate::event_bus::EventBus;
use crate::ports::{DocumentTextPort, GenerativeTextPort};
use crate::store::ConversationStore;

/// Assistant message inserted when the generative call fails
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error. Please check your API key and try again.";

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The collaborator answered
    Replied,
    /// The collaborator failed and the fallback text was appended
    Fallback,
}

/// Prompt used to summarise an uploaded PDF
pub fn pdf_summary_prompt(extracted: &str) -> String {
    format!(
        "Please analyze the following PDF content and provide a summary:\n\n{}",
        extracted
    )
}

#[derive(Clone)]
pub struct ChatSession {
    store: Rc<RefCell<ConversationStore>>,
    credentials: CredentialStore,
    event_bus: EventBus,
    busy: BusyFlag,
}

impl ChatSession {
    pub fn new(
        store: Rc<RefCell<ConversationStore>>,
        credentials: CredentialStore,
        event_bus: EventBus,
    ) -> Self {
        Self {
            store,
            credentials,
            event_bus,
            busy: BusyFlag::default(),
        }
    }

    pub fn store(&self) -> &Rc<RefCell<ConversationStore>> {
        &self.store
    }

    /// True while a turn is waiting on a collaborator
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Start a fresh conversation (the "New Chat" button)
    pub fn new_conversation(&self) -> ConversationId {
        self.store.borrow_mut().create_conversation()
    }

    /// Switch the active conversation; unknown ids are ignored
    pub fn select_conversation(&self, id: ConversationId) -> bool {
        self.store.borrow_mut().select_conversation(id)
    }

    /// Send a typed message and append the assistant's reply.
    pub async fn send_message(
        &self,
        input: &str,
        generator: &dyn GenerativeTextPort,
    ) -> Result<TurnOutcome> {
        let text = input.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("Message is empty".to_string()));
        }

        let _guard = self.claim()?;
        let credential = self.require_credential().await?;

        let conversation_id = self.begin_turn();
        self.append(conversation_id, text, Author::User)?;

        match generator.generate(&credential, text).await {
            Ok(reply) => {
                self.append(conversation_id, &reply, Author::Assistant)?;
                Ok(TurnOutcome::Replied)
            }
            Err(e) => {
                log::warn!("Generation failed: {}", e);
                self.append(conversation_id, FALLBACK_REPLY, Author::Assistant)?;
                self.event_bus.notify(Notification::destructive(
                    "Error",
                    "Failed to send message. Please check your API key.",
                ));
                Ok(TurnOutcome::Fallback)
            }
        }
    }

    /// Extract text from an uploaded PDF and ask for a summary.
    ///
    /// Nothing is appended when the file is rejected or extraction fails.
    pub async fn upload_document(
        &self,
        file: UploadedFile,
        generator: &dyn GenerativeTextPort,
        extractor: &dyn DocumentTextPort,
    ) -> Result<TurnOutcome> {
        let _guard = self.claim()?;
        let credential = self.require_credential().await?;

        if !file.is_pdf() {
            self.event_bus.notify(Notification::destructive(
                "Invalid File Type",
                "Please upload a PDF file.",
            ));
            return Err(AppError::InvalidInput(format!(
                "{} is not a PDF ({})",
                file.name, file.mime_type
            )));
        }

        let extracted = match extractor.extract_text(&file.bytes).await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("PDF extraction failed for {}: {}", file.name, e);
                self.event_bus.notify(Notification::destructive(
                    "PDF Processing Failed",
                    "Failed to extract text from PDF.",
                ));
                return Err(e);
            }
        };
        log::info!("Extracted {} chars from {}", extracted.len(), file.name);

        let conversation_id = self.begin_turn();
        self.append(
            conversation_id,
            &format!("Uploaded PDF: {}", file.name),
            Author::User,
        )?;

        match generator
            .generate(&credential, &pdf_summary_prompt(&extracted))
            .await
        {
            Ok(reply) => {
                self.append(conversation_id, &reply, Author::Assistant)?;
                self.event_bus.notify(Notification::info(
                    "PDF Processed",
                    "Your PDF has been analyzed successfully.",
                ));
                Ok(TurnOutcome::Replied)
            }
            Err(e) => {
                log::warn!("Generation failed for {}: {}", file.name, e);
                self.append(conversation_id, FALLBACK_REPLY, Author::Assistant)?;
                self.event_bus.notify(Notification::destructive(
                    "PDF Processing Failed",
                    "Failed to analyze the PDF. Please check your API key.",
                ));
                Ok(TurnOutcome::Fallback)
            }
        }
    }

    /// Mark the session busy until the guard drops. The view disables the
    /// chat controls from `TurnPending` to `TurnFinished`.
    fn claim(&self) -> Result<BusyGuard> {
        self.busy
            .acquire(&self.event_bus, AppEvent::TurnPending, AppEvent::TurnFinished)
    }

    async fn require_credential(&self) -> Result<String> {
        match self.credentials.load().await {
            Ok(Some(key)) => Ok(key),
            Ok(None) => {
                self.event_bus.notify(Notification::api_key_required());
                Err(AppError::MissingCredential)
            }
            Err(e) => {
                log::warn!("Could not read API key: {}", e);
                self.event_bus.notify(Notification::api_key_required());
                Err(AppError::MissingCredential)
            }
        }
    }

    fn begin_turn(&self) -> ConversationId {
        let conversation_id = self.store.borrow_mut().ensure_active();
        self.event_bus.emit(AppEvent::TurnStarted { conversation_id });
        conversation_id
    }

    fn append(
        &self,
        conversation_id: ConversationId,
        content: &str,
        author: Author,
    ) -> Result<MessageId> {
        let message_id = self
            .store
            .borrow_mut()
            .append_to(conversation_id, content, author)?;
        self.event_bus.emit(AppEvent::MessageAppended {
            conversation_id,
            message_id,
        });
        Ok(message_id)
    }
}
