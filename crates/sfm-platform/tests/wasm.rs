//! WASM-target tests for sfm-platform (Node.js runtime).
//!
//! Tests MemoryStorage, backend selection and the credential slot on top
//! of it under wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and the DOM helpers need a browser window.

use wasm_bindgen_test::*;

use sfm_core::credentials::CredentialStore;
use sfm_core::ports::{DocumentTextPort, StoragePort};
use sfm_platform::pdf::PdfTextExtractor;
use sfm_platform::storage::{auto_detect_storage, open_storage, MemoryStorage};
use sfm_types::config::{StorageBackendType, CREDENTIAL_STORAGE_KEY};
use sfm_types::AppError;
use std::rc::Rc;

// ─── MemoryStorage Tests ─────────────────────────────────

#[wasm_bindgen_test]
fn memory_storage_backend_name() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
async fn memory_storage_get_missing() {
    let storage = MemoryStorage::new();
    let result = storage.get("nonexistent").await.unwrap();
    assert!(result.is_none());
}

#[wasm_bindgen_test]
async fn memory_storage_set_and_get() {
    let storage = MemoryStorage::new();
    storage.set("key1", b"value1").await.unwrap();
    let result = storage.get("key1").await.unwrap();
    assert_eq!(result, Some(b"value1".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_overwrite() {
    let storage = MemoryStorage::new();
    storage.set("key", b"v1").await.unwrap();
    storage.set("key", b"v2").await.unwrap();
    let result = storage.get("key").await.unwrap();
    assert_eq!(result, Some(b"v2".to_vec()));
}

#[wasm_bindgen_test]
async fn memory_storage_delete() {
    let storage = MemoryStorage::new();
    storage.set("key", b"val").await.unwrap();
    storage.delete("key").await.unwrap();
    assert!(!storage.exists("key").await.unwrap());
}

// ─── Backend Selection Tests ─────────────────────────────

#[wasm_bindgen_test]
fn auto_detect_falls_back_to_memory_without_window() {
    let storage = auto_detect_storage();
    assert_eq!(storage.backend_name(), "memory");
}

#[wasm_bindgen_test]
fn open_storage_memory() {
    let storage = open_storage(&StorageBackendType::Memory);
    assert_eq!(storage.backend_name(), "memory");
}

// ─── Credential Slot Tests ───────────────────────────────

#[wasm_bindgen_test]
async fn credential_save_load_remove() {
    let storage: Rc<dyn StoragePort> = Rc::new(MemoryStorage::new());
    let credentials = CredentialStore::new(storage.clone(), CREDENTIAL_STORAGE_KEY);

    credentials.save(" AIza-test ").await.unwrap();
    assert_eq!(
        storage.get(CREDENTIAL_STORAGE_KEY).await.unwrap(),
        Some(b"AIza-test".to_vec())
    );
    assert_eq!(credentials.load().await.unwrap().as_deref(), Some("AIza-test"));

    credentials.remove().await.unwrap();
    assert!(!credentials.is_configured().await.unwrap());
}

// ─── PDF Tests ───────────────────────────────────────────

#[wasm_bindgen_test]
async fn pdf_extractor_rejects_garbage() {
    let extractor = PdfTextExtractor::new();
    let err = extractor.extract_text(b"definitely not a pdf").await.unwrap_err();
    assert!(matches!(err, AppError::Extraction(_)));
}
