//! Request and response bodies for the chat relay.

use polyglot_core::prompt::DEFAULT_LANGUAGE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Incoming chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub text: String,
    pub language: String,
}

impl ChatRequest {
    /// Reads the fields leniently from a JSON object.
    ///
    /// A missing or non-string `text` becomes `""`. A missing or non-string
    /// `language` becomes [`DEFAULT_LANGUAGE`]; any string, even an empty one,
    /// is kept as sent.
    pub fn from_object(fields: &Map<String, Value>) -> Self {
        let text = fields
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let language = fields
            .get("language")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_string();

        Self { text, language }
    }

    /// True when there is nothing to relay.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Body of every `/chat` reply, success or failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn reads_text_and_language() {
        let req = ChatRequest::from_object(&object(serde_json::json!({
            "text": "Hello", "language": "es"
        })));
        assert_eq!(req.text, "Hello");
        assert_eq!(req.language, "es");
        assert!(!req.is_empty());
    }

    #[test]
    fn language_defaults_to_en() {
        let req = ChatRequest::from_object(&object(serde_json::json!({"text": "Hi"})));
        assert_eq!(req.language, "en");
    }

    #[test]
    fn non_string_language_defaults_to_en() {
        let req = ChatRequest::from_object(&object(serde_json::json!({
            "text": "Hi", "language": null
        })));
        assert_eq!(req.language, "en");

        let req = ChatRequest::from_object(&object(serde_json::json!({
            "text": "Hi", "language": ["es"]
        })));
        assert_eq!(req.language, "en");
    }

    #[test]
    fn blank_language_is_kept_verbatim() {
        let req = ChatRequest::from_object(&object(serde_json::json!({
            "text": "Hi", "language": ""
        })));
        assert_eq!(req.language, "");

        let req = ChatRequest::from_object(&object(serde_json::json!({
            "text": "Hi", "language": "   "
        })));
        assert_eq!(req.language, "   ");
    }

    // Assumption: a non-string `text` is treated like a missing one.
    #[test]
    fn non_string_text_is_empty() {
        let req = ChatRequest::from_object(&object(serde_json::json!({"text": 42})));
        assert_eq!(req.text, "");
        assert!(req.is_empty());
    }

    #[test]
    fn whitespace_text_is_empty() {
        let req = ChatRequest::from_object(&object(serde_json::json!({"text": " \t\n "})));
        assert!(req.is_empty());
    }

    #[test]
    fn response_serializes_single_field() {
        let body = serde_json::to_value(ChatResponse {
            response: "ok".into(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"response": "ok"}));
    }
}
