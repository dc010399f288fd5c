//! `window.localStorage` backend.
//! Values are stored as UTF-8 strings under their plain key, so the
//! credential is readable by anything else on the origin that expects
//! `gemini-api-key`.

use async_trait::async_trait;
use sfm_core::ports::StoragePort;
use sfm_types::{AppError, Result};

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the window's local storage. Fails outside a browser window or
    /// when the user has disabled site data.
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

#[async_trait(?Send)]
impl StoragePort for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let value = self
            .storage
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?;
        Ok(value.map(String::into_bytes))
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(value)
            .map_err(|e| AppError::Storage(format!("value for {} is not UTF-8: {}", key, e)))?;
        self.storage
            .set_item(key, text)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localStorage"
    }
}
