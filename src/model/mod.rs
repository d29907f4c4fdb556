mod classifier;
mod gemini;
mod translator;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub use classifier::HttpClassifier;
pub use gemini::GeminiModel;
pub use translator::AzureTranslator;

/// One label/confidence pair produced by the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub score: f64,
}

/// Remote text generation: prompt in, generated text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Text classification (emotion labels with confidence).
#[async_trait]
pub trait TextClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<Classification>>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, to: &str) -> Result<String>;
}

/// Immutable handles to the external capabilities, built once at startup and
/// shared by every request.
#[derive(Clone)]
pub struct ModelManager {
    pub generator: Arc<dyn TextGenerator>,
    pub classifier: Arc<dyn TextClassifier>,
    pub translator: Arc<dyn Translator>,
}

impl ModelManager {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        classifier: Arc<dyn TextClassifier>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            generator,
            classifier,
            translator,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder().build()?;

        if config.google_api_key.is_none() {
            warn!("GOOGLE_API_KEY is not set; generation requests will fail");
        }
        info!("Using generation model {}", config.gemini_model);
        info!("Using classifier at {}", config.classifier_url);

        let generator = GeminiModel::new(
            client.clone(),
            &config.gemini_api_url,
            &config.gemini_model,
            config.google_api_key.clone(),
            config.generation.clone(),
        );
        let classifier = HttpClassifier::new(
            client.clone(),
            &config.classifier_url,
            config.hf_api_token.clone(),
        );
        let translator = AzureTranslator::new(
            client,
            &config.translator_url,
            config.translator_key.clone(),
            config.translator_region.clone(),
        );

        Ok(Self::new(
            Arc::new(generator),
            Arc::new(classifier),
            Arc::new(translator),
        ))
    }
}
