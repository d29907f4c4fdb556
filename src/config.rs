use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::warn;

pub const DEFAULT_GEMINI_MODEL: &str = "models/gemini-1.5-flash";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_CLASSIFIER_URL: &str =
    "https://api-inference.huggingface.co/models/j-hartmann/emotion-english-distilroberta-base";
pub const DEFAULT_TRANSLATOR_URL: &str = "https://api.cognitive.microsofttranslator.com";

/// Sampling parameters forwarded to the generation API. Unset fields are
/// left to the model's defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSettings {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_url: String,
    pub generation: GenerationSettings,
    pub classifier_url: String,
    pub hf_api_token: Option<String>,
    pub translator_key: Option<String>,
    pub translator_region: Option<String>,
    pub translator_url: String,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Read the configuration from the process environment. Call after
    /// `dotenv()` so values from a `.env` file are visible.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", raw))?,
            None => 5005,
        };

        let generation = GenerationSettings {
            temperature: parse_optional(&get, "TEMPERATURE"),
            top_p: parse_optional(&get, "TOP_P"),
            max_tokens: parse_optional(&get, "MAX_TOKENS"),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            google_api_key: get("GOOGLE_API_KEY"),
            gemini_model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url: get("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            generation,
            classifier_url: get("CLASSIFIER_URL")
                .unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_string()),
            hf_api_token: get("HF_API_TOKEN"),
            translator_key: get("AZURE_TRANSLATOR_KEY"),
            translator_region: get("AZURE_TRANSLATOR_REGION"),
            translator_url: get("AZURE_TRANSLATOR_URL")
                .unwrap_or_else(|| DEFAULT_TRANSLATOR_URL.to_string()),
            cors_origin: get("CORS_ORIGIN"),
        })
    }
}

fn parse_optional<T, G>(get: &G, key: &str) -> Option<T>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    let raw = get(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable {} value: {}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5005);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.classifier_url, DEFAULT_CLASSIFIER_URL);
        assert!(config.google_api_key.is_none());
        assert_eq!(config.generation, GenerationSettings::default());
    }

    #[test]
    fn reads_credentials_and_sampling() {
        let config = config_from(&[
            ("GOOGLE_API_KEY", "secret"),
            ("PORT", "8080"),
            ("TEMPERATURE", "0.4"),
            ("MAX_TOKENS", "256"),
        ])
        .unwrap();
        assert_eq!(config.google_api_key.as_deref(), Some("secret"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.generation.temperature, Some(0.4));
        assert_eq!(config.generation.max_tokens, Some(256));
        assert_eq!(config.generation.top_p, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("GOOGLE_API_KEY", "  "), ("HOST", "")]).unwrap();
        assert!(config.google_api_key.is_none());
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn bad_sampling_value_is_ignored() {
        let config = config_from(&[("TOP_P", "lots")]).unwrap();
        assert_eq!(config.generation.top_p, None);
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(config_from(&[("PORT", "not-a-port")]).is_err());
    }
}
