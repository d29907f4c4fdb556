use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::Translator;

/// Azure Translator v3 client.
pub struct AzureTranslator {
    client: Client,
    endpoint: String,
    key: Option<String>,
    region: Option<String>,
}

impl AzureTranslator {
    pub fn new(client: Client, base_url: &str, key: Option<String>, region: Option<String>) -> Self {
        Self {
            client,
            endpoint: format!("{}/translate", base_url.trim_end_matches('/')),
            key,
            region,
        }
    }
}

#[async_trait]
impl Translator for AzureTranslator {
    async fn translate(&self, text: &str, to: &str) -> Result<String> {
        let key = self
            .key
            .as_deref()
            .ok_or_else(|| anyhow!("AZURE_TRANSLATOR_KEY is not configured"))?;

        let mut request = self
            .client
            .post(&self.endpoint)
            .query(&[("api-version", "3.0"), ("to", to)])
            .header("Ocp-Apim-Subscription-Key", key)
            .json(&json!([{ "Text": text }]));
        if let Some(region) = &self.region {
            request = request.header("Ocp-Apim-Subscription-Region", region);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Translation request failed ({}): {}", status, error_text));
        }

        let body: Value = response.json().await?;
        translated_text(&body)
    }
}

fn translated_text(body: &Value) -> Result<String> {
    body.pointer("/0/translations/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("Failed to extract translation from response"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_translation() {
        let body = json!([{ "translations": [{ "text": "Bonjour", "to": "fr" }] }]);
        assert_eq!(translated_text(&body).unwrap(), "Bonjour");
    }

    #[test]
    fn missing_translation_is_an_error() {
        assert!(translated_text(&json!([])).is_err());
    }
}
