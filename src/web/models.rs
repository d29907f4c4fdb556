use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CompleteResponse {
    pub completed: String,
}

/// `messages` stays untyped so a wrongly typed value can be answered with a
/// descriptive 400 instead of a body parse failure. An explicit `null` is
/// kept as `Some(Value::Null)` and rejected as malformed.
#[derive(Debug, Serialize, Deserialize)]
pub struct InsightRequest {
    #[serde(default, deserialize_with = "present")]
    pub messages: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

pub const INVALID_MESSAGES: &str = "Invalid 'messages' format";
pub const NO_MESSAGES: &str = "No messages provided.";

impl InsightRequest {
    /// The messages as strings. A missing field counts as an empty list.
    pub fn messages(self) -> Result<Vec<String>, &'static str> {
        match self.messages {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(INVALID_MESSAGES),
                })
                .collect(),
            Some(_) => Err(INVALID_MESSAGES),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsightResponse {
    pub summary: String,
    #[serde(rename = "sentimentDistribution")]
    pub sentiment_distribution: SentimentDistribution,
}

/// Percentages per emotion category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Joy")]
    pub joy: u32,
    #[serde(rename = "Sadness")]
    pub sadness: u32,
    #[serde(rename = "Neutral")]
    pub neutral: u32,
}

impl SentimentDistribution {
    /// The distribution reported for every insight. It is not derived from the
    /// summarized conversation.
    pub fn fixed() -> Self {
        Self {
            joy: 40,
            sadness: 10,
            neutral: 50,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AutoReplyRequest {
    #[serde(default)]
    pub message: String,
    pub context: Option<String>,
    /// Any JSON value; anything but a known persona name means `Friend`.
    #[serde(default)]
    pub persona: Option<Value>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AutoReplyResponse {
    pub reply: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SmartSearchRequest {
    pub query: Option<String>,
    pub history: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SmartSearchResponse {
    pub results: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn insight(body: Value) -> InsightRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn insight_accepts_string_list() {
        let messages = insight(json!({ "messages": ["hi", "how are you"] }))
            .messages()
            .unwrap();
        assert_eq!(messages, vec!["hi", "how are you"]);
    }

    #[test]
    fn insight_rejects_non_list() {
        let result = insight(json!({ "messages": "not a list" })).messages();
        assert_eq!(result, Err(INVALID_MESSAGES));
    }

    #[test]
    fn insight_rejects_mixed_list() {
        let result = insight(json!({ "messages": ["ok", 3] })).messages();
        assert_eq!(result, Err(INVALID_MESSAGES));
    }

    #[test]
    fn insight_rejects_null_messages() {
        let result = insight(json!({ "messages": null })).messages();
        assert_eq!(result, Err(INVALID_MESSAGES));
    }

    #[test]
    fn insight_missing_messages_is_empty() {
        assert_eq!(insight(json!({})).messages(), Ok(Vec::new()));
    }

    #[test]
    fn distribution_serializes_with_category_names() {
        let value = serde_json::to_value(SentimentDistribution::fixed()).unwrap();
        assert_eq!(value, json!({ "Joy": 40, "Sadness": 10, "Neutral": 50 }));
    }
}
