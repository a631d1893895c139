//! Advice service backed by a generative-text API.

use crate::config::AdviceConfig;
use crate::services::upstream::UpstreamError;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

/// System instruction sent with every advice request. It pins the model
/// output to plain HTML fragments the frontend can inject directly.
const SYSTEM_INSTRUCTION: &str = "You are a helpful and creative local guide. \
Your goal is to give practical and fun advice based on the weather. \
Format your response as simple HTML using <h3> for titles and <ul>/<li> for lists. \
Do not include markdown like ```html or the html tag.";

/// Service for the generative-text upstream behind the advice endpoint
pub struct AdviceService {
    client: Client,
    config: AdviceConfig,
}

impl AdviceService {
    /// Create a new advice service with the given configuration
    pub fn new(config: AdviceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Ask the model for advice on a free-text query.
    ///
    /// Sends a single generateContent request carrying the query and the
    /// fixed system instruction, and extracts the generated text from the
    /// response. Fails without touching the network when no API key is
    /// configured.
    pub async fn get_advice(&self, query: &str) -> Result<String, UpstreamError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, api_key
        );

        let payload = json!({
            "contents": [{ "parts": [{ "text": query }] }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
        });

        debug!(model = %self.config.model, "Requesting advice from generative-text API");

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let result: Value = response.json().await?;
        let text = extract_generated_text(&result)
            .ok_or(UpstreamError::InvalidBody("missing generated text"))?;

        Ok(text.to_string())
    }
}

/// Walks the response's nested optional path down to the generated text:
/// `candidates[0].content.parts[0].text`.
fn extract_generated_text(value: &Value) -> Option<&str> {
    value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
}
