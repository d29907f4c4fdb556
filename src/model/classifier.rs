use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{Classification, TextClassifier};

/// Text classification served over HTTP (Hugging Face inference API or a
/// compatible local server).
pub struct HttpClassifier {
    client: Client,
    url: String,
    token: Option<String>,
}

/// Inference servers answer either with one list of labels or with one list
/// per input.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifierResponse {
    Nested(Vec<Vec<Classification>>),
    Flat(Vec<Classification>),
}

impl ClassifierResponse {
    fn into_labels(self) -> Vec<Classification> {
        match self {
            ClassifierResponse::Flat(labels) => labels,
            ClassifierResponse::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
        }
    }
}

impl HttpClassifier {
    pub fn new(client: Client, url: &str, token: Option<String>) -> Self {
        Self {
            client,
            url: url.to_string(),
            token,
        }
    }
}

#[async_trait]
impl TextClassifier for HttpClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<Classification>> {
        let mut request = self.client.post(&self.url).json(&json!({ "inputs": text }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Classifier request failed ({}): {}", status, error_text));
        }

        let body: ClassifierResponse = response.json().await?;
        let labels = top_label(body.into_labels());
        debug!("Classification: {:?}", labels);
        Ok(labels)
    }
}

/// Keep only the highest-scoring label, matching the single-label output of
/// a default text-classification pipeline.
fn top_label(labels: Vec<Classification>) -> Vec<Classification> {
    labels
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .into_iter()
        .collect()
}
