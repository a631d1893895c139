//! Generative-text upstream configuration for the advice endpoint.

use std::env;

/// Configuration for the generative-text API behind the advice endpoint
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    /// Secret API key. Requests fail with a generic 500 when this is absent;
    /// the key itself is never exposed to callers.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash-preview-05-20".to_string(),
        }
    }
}

impl AdviceConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();

        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        let model = env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| "gemini-2.5-flash-preview-05-20".to_string());

        Self {
            api_key,
            base_url,
            model,
        }
    }
}
