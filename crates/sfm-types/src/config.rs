use serde::{Deserialize, Serialize};

/// Local-storage key holding the user's Gemini API key
pub const CREDENTIAL_STORAGE_KEY: &str = "gemini-api-key";

/// Local-storage key holding the identity session
pub const SESSION_STORAGE_KEY: &str = "sfm:session";

/// Top-level application configuration, passed explicitly into the
/// adapters and services that need it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub identity: IdentityConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub model: String,
    pub api_base: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            api_base: option_env!("SFM_GEMINI_API_BASE")
                .unwrap_or("https://generativelanguage.googleapis.com")
                .to_string(),
        }
    }
}

/// Header carrying the user's Gemini API key
pub const GEMINI_KEY_HEADER: &str = "x-goog-api-key";

impl GeminiConfig {
    /// `generateContent` URL. The key is sent in [`GEMINI_KEY_HEADER`].
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model,
        )
    }
}

/// Firebase web-app settings for the Identity Toolkit and Secure Token
/// REST APIs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    pub api_key: String,
    pub api_base: String,
    /// Base of the token service that trades refresh tokens for id tokens
    pub token_base: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: option_env!("SFM_FIREBASE_API_KEY")
                .unwrap_or("placeholder-api-key")
                .to_string(),
            api_base: "https://identitytoolkit.googleapis.com/v1".to_string(),
            token_base: "https://securetoken.googleapis.com/v1".to_string(),
        }
    }
}

impl IdentityConfig {
    /// URL for an `accounts:<method>` call
    pub fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            self.api_base.trim_end_matches('/'),
            method,
            self.api_key
        )
    }

    /// URL of the refresh-token exchange
    pub fn token_endpoint(&self) -> String {
        format!(
            "{}/token?key={}",
            self.token_base.trim_end_matches('/'),
            self.api_key
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackendType,
    pub credential_key: String,
    pub session_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendType::Auto,
            credential_key: CREDENTIAL_STORAGE_KEY.to_string(),
            session_key: SESSION_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackendType {
    /// Local storage when the browser offers it, memory otherwise
    Auto,
    Memory,
    LocalStorage,
}
