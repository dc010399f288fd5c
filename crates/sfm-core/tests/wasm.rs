//! WASM-target tests for sfm-core.
//!
//! Runs the EventBus, ConversationStore and ChatSession tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use sfm_core::chat::{ChatSession, TurnOutcome, FALLBACK_REPLY};
use sfm_core::credentials::CredentialStore;
use sfm_core::event_bus::EventBus;
use sfm_core::ports::*;
use sfm_core::store::ConversationStore;
use sfm_types::event::AppEvent;
use sfm_types::{AppError, Result};

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(AppEvent::TurnFinished);
    bus.emit(AppEvent::WorkspaceBusy { busy: true });

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn event_bus_multiple_emits() {
    let bus = EventBus::new();
    for i in 0..100 {
        bus.emit(AppEvent::WorkspaceOutput { text: format!("out{}", i) });
    }
    assert_eq!(bus.drain().len(), 100);
}

// ─── ConversationStore Tests ─────────────────────────────

#[wasm_bindgen_test]
fn store_auto_creates_and_titles() {
    let mut store = ConversationStore::new();
    store.append_message("Hello there, how are you today?", true);
    store.append_message("Fine, thanks.", false);

    assert_eq!(store.len(), 1);
    let conv = store.active().unwrap();
    assert_eq!(conv.title(), "Hello there, how are you to...");
    assert_eq!(conv.messages().len(), 2);
}

#[wasm_bindgen_test]
fn store_newest_first() {
    let mut store = ConversationStore::new();
    let a = store.create_conversation();
    let b = store.create_conversation();
    let ids: Vec<_> = store.summaries().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![b, a]);
}

// ─── ChatSession Tests ───────────────────────────────────

struct MemoryKv(RefCell<HashMap<String, Vec<u8>>>);

#[async_trait(?Send)]
impl StoragePort for MemoryKv {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.0.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "test"
    }
}

struct FixedReply(Option<&'static str>);

#[async_trait(?Send)]
impl GenerativeTextPort for FixedReply {
    async fn generate(&self, _credential: &str, _prompt: &str) -> Result<String> {
        self.0
            .map(str::to_string)
            .ok_or_else(|| AppError::Generation("offline".to_string()))
    }
}

async fn session_with_key() -> ChatSession {
    let storage = Rc::new(MemoryKv(RefCell::new(HashMap::new())));
    let credentials = CredentialStore::new(storage, "gemini-api-key");
    credentials.save("test-key").await.unwrap();
    ChatSession::new(
        Rc::new(RefCell::new(ConversationStore::new())),
        credentials,
        EventBus::new(),
    )
}

#[wasm_bindgen_test]
async fn chat_turn_appends_reply() {
    let session = session_with_key().await;
    let outcome = session.send_message("Hi", &FixedReply(Some("Hello!"))).await.unwrap();
    assert_eq!(outcome, TurnOutcome::Replied);

    let store = session.store().borrow();
    let messages = store.active().unwrap().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].content(), "Hello!");
}

#[wasm_bindgen_test]
async fn chat_turn_falls_back_on_error() {
    let session = session_with_key().await;
    let outcome = session.send_message("Hi", &FixedReply(None)).await.unwrap();
    assert_eq!(outcome, TurnOutcome::Fallback);

    let store = session.store().borrow();
    let conv = store.active().unwrap();
    assert_eq!(conv.messages()[1].content(), FALLBACK_REPLY);
    assert_eq!(conv.title(), "Hi");
    assert!(!session.is_busy());
}
