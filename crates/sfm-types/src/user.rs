use serde::{Deserialize, Serialize};

/// The signed-in account as reported by the identity provider.
/// The application only reads presence, email and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: Option<String>,
    #[serde(default)]
    pub metadata: UserMetadata,
    /// Short-lived provider session token, never displayed
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id_token: String,
    /// Long-lived token that mints a new `id_token` after a reload
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub creation_time: Option<String>,
    pub last_sign_in_time: Option<String>,
}

impl User {
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn creation_time_or_unknown(&self) -> &str {
        self.metadata.creation_time.as_deref().unwrap_or("Unknown")
    }

    pub fn last_sign_in_or_unknown(&self) -> &str {
        self.metadata.last_sign_in_time.as_deref().unwrap_or("Unknown")
    }
}
