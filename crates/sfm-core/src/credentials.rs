//! The API credential slot: a single opaque string under a fixed key.

use std::rc::Rc;

use sfm_types::{AppError, Result};
use crate::ports::StoragePort;

/// Narrow read/write access to the stored Gemini API key.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Rc<dyn StoragePort>,
    key: String,
}

impl CredentialStore {
    pub fn new(storage: Rc<dyn StoragePort>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The stored key, if one is present and non-blank
    pub async fn load(&self) -> Result<Option<String>> {
        let Some(bytes) = self.storage.get(&self.key).await? else {
            return Ok(None);
        };
        let value = String::from_utf8(bytes)
            .map_err(|e| AppError::Storage(format!("credential is not UTF-8: {}", e)))?;
        let value = value.trim();
        if value.is_empty() {
            Ok(None)
        } else {
            Ok(Some(value.to_string()))
        }
    }

    /// Store a trimmed key. Blank input is rejected.
    pub async fn save(&self, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(AppError::InvalidInput("Please enter a valid API key.".to_string()));
        }
        self.storage.set(&self.key, value.as_bytes()).await?;
        log::info!("API key saved to {}", self.storage.backend_name());
        Ok(())
    }

    pub async fn remove(&self) -> Result<()> {
        self.storage.delete(&self.key).await?;
        log::info!("API key removed from {}", self.storage.backend_name());
        Ok(())
    }

    pub async fn is_configured(&self) -> Result<bool> {
        Ok(self.load().await?.is_some())
    }
}
