use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::{json, Map, Value};

use super::TextGenerator;
use crate::config::GenerationSettings;

/// Client for the Gemini `generateContent` API.
pub struct GeminiModel {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    settings: GenerationSettings,
}

impl GeminiModel {
    pub fn new(
        client: Client,
        api_url: &str,
        model: &str,
        api_key: Option<String>,
        settings: GenerationSettings,
    ) -> Self {
        let endpoint = format!(
            "{}/{}:generateContent",
            api_url.trim_end_matches('/'),
            model.trim_start_matches('/')
        );
        Self {
            client,
            endpoint,
            api_key,
            settings,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("GOOGLE_API_KEY is not configured"))?;

        debug!("Prompt: {}", prompt);
        let payload = request_payload(prompt, &self.settings);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini request failed ({}): {}", status, error_text));
        }

        let response_json: Value = response.json().await?;
        debug!("Response JSON: {}", response_json);

        let content = extract_text(&response_json)?;
        info!("Response length: {} characters", content.len());
        Ok(content)
    }
}

fn request_payload(prompt: &str, settings: &GenerationSettings) -> Value {
    let mut payload = json!({
        "contents": [{ "parts": [{ "text": prompt }] }]
    });

    let mut generation_config = Map::new();
    if let Some(temperature) = settings.temperature {
        generation_config.insert("temperature".into(), json!(temperature));
    }
    if let Some(top_p) = settings.top_p {
        generation_config.insert("topP".into(), json!(top_p));
    }
    if let Some(max_tokens) = settings.max_tokens {
        generation_config.insert("maxOutputTokens".into(), json!(max_tokens));
    }
    if !generation_config.is_empty() {
        payload["generationConfig"] = Value::Object(generation_config);
    }

    payload
}

/// Concatenated text parts of the first candidate. A response without any
/// text (for example a blocked prompt) is an error.
fn extract_text(response: &Value) -> Result<String> {
    let parts = response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.as_array())
        .ok_or_else(|| {
            let reason = response
                .pointer("/promptFeedback/blockReason")
                .and_then(Value::as_str)
                .unwrap_or("no candidates");
            anyhow!("Failed to extract content from response: {}", reason)
        })?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(anyhow!("Response contained no text"));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_without_settings_has_no_generation_config() {
        let payload = request_payload("hello", &GenerationSettings::default());
        assert_eq!(payload["contents"][0]["parts"][0]["text"], "hello");
        assert!(payload.get("generationConfig").is_none());
    }

    #[test]
    fn payload_carries_sampling_settings() {
        let settings = GenerationSettings {
            temperature: Some(0.5),
            top_p: None,
            max_tokens: Some(128),
        };
        let payload = request_payload("hello", &settings);
        assert_eq!(payload["generationConfig"]["temperature"], json!(0.5));
        assert_eq!(payload["generationConfig"]["maxOutputTokens"], json!(128));
        assert!(payload["generationConfig"].get("topP").is_none());
    }

    #[test]
    fn extracts_and_joins_text_parts() {
        let response = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello " }, { "text": "there" }] }
            }]
        });
        assert_eq!(extract_text(&response).unwrap(), "Hello there");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let response = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = extract_text(&response).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let model = GeminiModel::new(
            Client::new(),
            "https://example.test/v1beta/",
            "models/gemini-1.5-flash",
            None,
            GenerationSettings::default(),
        );
        assert_eq!(
            model.endpoint,
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[actix_web::test]
    async fn missing_api_key_fails_without_network() {
        let model = GeminiModel::new(
            Client::new(),
            "http://127.0.0.1:9",
            "models/test",
            None,
            GenerationSettings::default(),
        );
        assert!(model.generate("hi").await.is_err());
    }
}
