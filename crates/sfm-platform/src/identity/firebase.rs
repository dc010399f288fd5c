//! Firebase Authentication over the Identity Toolkit REST API.
//!
//! Email/password accounts only. The signed-in user is held in memory and
//! mirrored to storage as JSON so a page reload can restore it. On restore
//! the stored refresh token is traded for a new id token, which is then
//! validated with `accounts:lookup`.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::DateTime;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use sfm_core::ports::{IdentityPort, StoragePort};
use sfm_types::{
    config::IdentityConfig,
    user::{User, UserMetadata},
    AppError, Result,
};

pub struct FirebaseIdentity {
    config: IdentityConfig,
    storage: Rc<dyn StoragePort>,
    session_key: String,
    user: RefCell<Option<User>>,
}

impl FirebaseIdentity {
    pub fn new(
        config: IdentityConfig,
        storage: Rc<dyn StoragePort>,
        session_key: impl Into<String>,
    ) -> Self {
        Self {
            config,
            storage,
            session_key: session_key.into(),
            user: RefCell::new(None),
        }
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, body: Value) -> Result<T> {
        let request = Request::post(&self.config.endpoint(method))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.send(&format!("accounts:{}", method), request).await
    }

    async fn send<T: DeserializeOwned>(&self, label: &str, request: Request) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let code = error_code(&text).unwrap_or_else(|| format!("HTTP {}", status));
            log::warn!("{} failed: {}", label, code);
            return Err(AppError::Identity(friendly_message(&code)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Identity(format!("Unexpected response: {}", e)))
    }

    /// Trade a refresh token for a fresh id token
    async fn refresh(&self, refresh_token: &str) -> Result<TokenResponse> {
        let request = Request::post(&self.config.token_endpoint())
            .header("Content-Type", "application/json")
            .json(&refresh_request_body(refresh_token))
            .map_err(|e| AppError::Network(e.to_string()))?;
        self.send("token refresh", request).await
    }

    /// Exchange credentials, then fetch account metadata
    async fn authenticate(&self, method: &str, email: &str, password: &str) -> Result<User> {
        let auth: AuthResponse = self
            .call(
                method,
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;

        let metadata = match self.lookup(&auth.id_token).await {
            Ok(account) => account.metadata(),
            Err(e) => {
                log::warn!("Account lookup failed after {}: {}", method, e);
                UserMetadata::default()
            }
        };

        let user = User {
            uid: auth.local_id,
            email: auth.email.or_else(|| Some(email.to_string())),
            metadata,
            id_token: auth.id_token,
            refresh_token: auth.refresh_token,
        };
        self.remember(Some(user.clone())).await;
        Ok(user)
    }

    async fn lookup(&self, id_token: &str) -> Result<AccountInfo> {
        let data: LookupResponse = self.call("lookup", json!({ "idToken": id_token })).await?;
        data.users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Identity("Account not found.".to_string()))
    }

    /// Offline keeps the stored session; any provider rejection ends it
    async fn settle_failed_restore(&self, stored: User, error: AppError) -> Option<User> {
        if keeps_session(&error) {
            log::warn!("Offline during restore, keeping stored session: {}", error);
            *self.user.borrow_mut() = Some(stored.clone());
            Some(stored)
        } else {
            log::info!("Stored session is no longer valid: {}", error);
            self.remember(None).await;
            None
        }
    }

    /// Update the in-memory user and its persisted copy. Storage failures
    /// only cost the session on the next reload, so they are logged.
    async fn remember(&self, user: Option<User>) {
        let persisted = match &user {
            Some(u) => match serde_json::to_vec(u) {
                Ok(bytes) => self.storage.set(&self.session_key, &bytes).await,
                Err(e) => Err(e.into()),
            },
            None => self.storage.delete(&self.session_key).await,
        };
        if let Err(e) = persisted {
            log::warn!("Could not persist session: {}", e);
        }
        *self.user.borrow_mut() = user;
    }
}

#[async_trait(?Send)]
impl IdentityPort for FirebaseIdentity {
    fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    async fn restore(&self) -> Result<Option<User>> {
        let Some(bytes) = self.storage.get(&self.session_key).await? else {
            return Ok(None);
        };
        let stored: User = match serde_json::from_slice(&bytes) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Discarding unreadable session: {}", e);
                self.remember(None).await;
                return Ok(None);
            }
        };

        let stored = if stored.refresh_token.is_empty() {
            stored
        } else {
            let refresh_token = stored.refresh_token.clone();
            match self.refresh(&refresh_token).await {
                Ok(tokens) => User {
                    id_token: tokens.id_token,
                    refresh_token: tokens.refresh_token,
                    ..stored
                },
                Err(e) => return Ok(self.settle_failed_restore(stored, e).await),
            }
        };

        match self.lookup(&stored.id_token).await {
            Ok(account) => {
                let user = User {
                    email: account.email.clone().or(stored.email),
                    metadata: account.metadata(),
                    ..stored
                };
                log::info!("Restored session for {}", user.email_or_empty());
                self.remember(Some(user.clone())).await;
                Ok(Some(user))
            }
            Err(e) => Ok(self.settle_failed_restore(stored, e).await),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        self.authenticate("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<User> {
        self.authenticate("signUp", email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        self.remember(None).await;
        Ok(())
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

/// Secure Token API reply; unlike Identity Toolkit it uses snake_case
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) id_token: String,
    pub(crate) refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountInfo {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    last_login_at: Option<String>,
}

impl AccountInfo {
    pub(crate) fn metadata(&self) -> UserMetadata {
        UserMetadata {
            creation_time: self.created_at.as_deref().and_then(format_millis),
            last_sign_in_time: self.last_login_at.as_deref().and_then(format_millis),
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────

/// Milliseconds since the epoch (as a decimal string) to an HTTP-date,
/// the format the Firebase web SDK reports account times in.
pub(crate) fn format_millis(millis: &str) -> Option<String> {
    let ms: i64 = millis.trim().parse().ok()?;
    let at = DateTime::from_timestamp_millis(ms)?;
    Some(at.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
}

pub(crate) fn refresh_request_body(refresh_token: &str) -> Value {
    json!({
        "grant_type": "refresh_token",
        "refresh_token": refresh_token,
    })
}

/// Whether a failed restore should keep the stored session
pub(crate) fn keeps_session(error: &AppError) -> bool {
    matches!(error, AppError::Network(_))
}

/// `error.message` of an Identity Toolkit error body. Some codes carry a
/// detail after " : ", which is dropped.
pub(crate) fn error_code(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = value["error"]["message"].as_str()?;
    let code = message.split(" : ").next().unwrap_or(message).trim();
    Some(code.to_string())
}

pub(crate) fn friendly_message(code: &str) -> String {
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Incorrect email or password.".to_string()
        }
        "EMAIL_EXISTS" => "An account with this email already exists.".to_string(),
        "INVALID_EMAIL" => "Please enter a valid email address.".to_string(),
        "WEAK_PASSWORD" => "Password should be at least 6 characters.".to_string(),
        "USER_DISABLED" => "This account has been disabled.".to_string(),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Too many attempts. Please try again later.".to_string()
        }
        "OPERATION_NOT_ALLOWED" => "Email sign-in is not enabled.".to_string(),
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "INVALID_REFRESH_TOKEN" | "USER_NOT_FOUND" => {
            "Your session has expired. Please sign in again.".to_string()
        }
        other => other.to_string(),
    }
}
