//! Google Gemini adapter.
//!
//! Speaks the `generateContent` REST endpoint of the generative-language
//! API. The API key travels in the `x-goog-api-key` header, never in the
//! URL; the prompt is sent as a single user turn. Uses browser `fetch()` via gloo-net for WASM
//! compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use sfm_core::ports::GenerativeTextPort;
use sfm_types::{
    config::{GeminiConfig, GEMINI_KEY_HEADER},
    AppError, Result,
};

pub struct GeminiProvider {
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait(?Send)]
impl GenerativeTextPort for GeminiProvider {
    async fn generate(&self, credential: &str, prompt: &str) -> Result<String> {
        if credential.trim().is_empty() {
            return Err(AppError::Generation("API key is empty".to_string()));
        }

        let url = self.config.generate_url();
        let body = build_request_body(prompt);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .header(GEMINI_KEY_HEADER, credential.trim())
            .json(&body)
            .map_err(|e| AppError::Generation(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("request failed: {}", e)))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::Generation(format!(
                "HTTP {}: {}",
                status,
                upstream_error_message(&text)
            )));
        }

        let data: ApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        let text = reply_text(data)?;
        log::debug!("{} replied with {} chars", self.config.model, text.len());
        Ok(text)
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    candidates: Vec<ApiCandidate>,
    #[serde(default, rename = "promptFeedback")]
    prompt_feedback: Option<ApiPromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct ApiCandidate {
    #[serde(default)]
    content: Option<ApiContent>,
}

#[derive(Debug, Deserialize)]
struct ApiContent {
    #[serde(default)]
    parts: Vec<ApiPart>,
}

#[derive(Debug, Deserialize)]
struct ApiPart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiPromptFeedback {
    #[serde(default, rename = "blockReason")]
    block_reason: Option<String>,
}

// ─── Serialization helpers ───────────────────────────────────

pub(crate) fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Text of the first candidate, all parts joined
pub(crate) fn reply_text(data: ApiResponse) -> Result<String> {
    let Some(candidate) = data.candidates.into_iter().next() else {
        let reason = data
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates in response".to_string());
        return Err(AppError::Generation(reason));
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::Generation("empty candidate".to_string()));
    }
    Ok(text)
}

/// `error.message` of a Google API error body, or the raw body
pub(crate) fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.to_string())
}
