//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `sfm-core` (pure Rust).
//! Implementations live in `sfm-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use sfm_types::{user::User, Result};

// ─── Generative Text Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait GenerativeTextPort {
    /// Send a single prompt and return the generated text.
    ///
    /// Every failure (missing or invalid key, network, upstream error)
    /// surfaces as `AppError::Generation`; callers do not distinguish them.
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String>;
}

// ─── Document Text Port ──────────────────────────────────────

#[async_trait(?Send)]
pub trait DocumentTextPort {
    /// Extract plain text from a PDF held in memory
    async fn extract_text(&self, data: &[u8]) -> Result<String>;
}

// ─── Identity Port ───────────────────────────────────────────

#[async_trait(?Send)]
pub trait IdentityPort {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<User>;

    /// Reload a previously persisted session
    async fn restore(&self) -> Result<Option<User>>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<User>;

    async fn sign_out(&self) -> Result<()>;
}

// ─── Storage Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait StoragePort {
    /// Get a value by key
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Set a value
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Delete a value
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
