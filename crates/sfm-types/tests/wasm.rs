//! WASM-target tests for sfm-types.
//!
//! Exercises the pieces that depend on browser-provided randomness and
//! clocks (uuid, chrono) under wasm32-unknown-unknown via
//! `wasm-pack test --node`.

use wasm_bindgen_test::*;

use sfm_types::conversation::*;
use sfm_types::event::*;
use sfm_types::message::*;
use sfm_types::mode::*;

// ─── Identity & Clock Tests ──────────────────────────────

#[wasm_bindgen_test]
fn message_ids_unique() {
    let a = Message::user("a");
    let b = Message::assistant("b");
    assert_ne!(a.id(), b.id());
}

#[wasm_bindgen_test]
fn conversation_ids_unique() {
    assert_ne!(Conversation::new().id(), Conversation::new().id());
}

#[wasm_bindgen_test]
fn message_timestamps_are_ordered() {
    let first = Message::user("first");
    let second = Message::user("second");
    assert!(second.created_at() >= first.created_at());
}

// ─── Conversation Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn conversation_title_from_first_user_message() {
    let mut conv = Conversation::new();
    conv.push(Message::assistant("greeting"));
    conv.push(Message::user("Hello there, how are you today?"));
    conv.push(Message::user("ignored"));
    assert_eq!(conv.title(), "Hello there, how are you to...");
    assert_eq!(conv.messages().len(), 3);
}

#[wasm_bindgen_test]
fn conversation_summary_counts_messages() {
    let mut conv = Conversation::new();
    conv.push(Message::user("one"));
    assert_eq!(conv.summary().message_count, 1);
}

// ─── Mode & Event Tests ──────────────────────────────────

#[wasm_bindgen_test]
fn mode_prompt_includes_content() {
    let prompt = AiMode::Research.build_prompt(Complexity::Expert, "p < 0.05");
    assert!(prompt.contains("p < 0.05"));
    assert!(prompt.contains("expert"));
}

#[wasm_bindgen_test]
fn notification_roundtrip() {
    let n = Notification::destructive("Error", "Failed");
    let json = serde_json::to_string(&n).unwrap();
    let restored: Notification = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, n);
}
