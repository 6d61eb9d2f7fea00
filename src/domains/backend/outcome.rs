//! Invocation outcomes and their rendering.
//!
//! Every tool invocation collapses into exactly one `InvocationResult`, and
//! every `InvocationResult` renders to exactly one string. Callers never see
//! a raised error, a partial response or an unserialized object.

use serde_json::{Value, json};

/// Successful response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Response body that parsed as JSON.
    Json(Value),

    /// Raw text body for non-JSON responses.
    Text(String),
}

/// The single outcome of one tool invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
    /// 2xx response, payload passed through unmodified.
    Success(Payload),

    /// A required alternative input was missing; no backend call was made.
    Validation { message: String },

    /// The backend answered with a non-success status.
    RemoteError { message: String, status: u16 },

    /// The call never completed: DNS, connection or timeout failure.
    TransportError { message: String },
}

impl InvocationResult {
    /// Shorthand for a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::TransportError {
            message: message.into(),
        }
    }

    /// Whether this outcome is anything other than a success.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Success(_))
    }

    /// Render the outcome to the single string returned to callers.
    ///
    /// Success payloads are pretty-printed JSON (2-space indent) or verbatim
    /// text; every error shape becomes a JSON object with an `error` field,
    /// plus a `status` field for backend errors. Rendering never fails: a
    /// payload that refuses to serialize degrades to its compact textual
    /// form instead.
    pub fn render(&self) -> String {
        match self {
            Self::Success(Payload::Json(value)) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Success(Payload::Text(text)) => text.clone(),
            Self::Validation { message } => json!({ "error": message }).to_string(),
            Self::RemoteError { message, status } => {
                json!({ "error": message, "status": status }).to_string()
            }
            Self::TransportError { message } => json!({ "error": message }).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_success_round_trips() {
        let payload = json!({"id": 1, "name": "Rex"});
        let rendered = InvocationResult::Success(Payload::Json(payload.clone())).render();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_json_success_is_indented() {
        let rendered = InvocationResult::Success(Payload::Json(json!({"id": 1}))).render();
        assert!(rendered.contains("\n  \"id\": 1"));
    }

    #[test]
    fn test_text_success_is_verbatim() {
        let rendered = InvocationResult::Success(Payload::Text("plain body".to_string())).render();
        assert_eq!(rendered, "plain body");
    }

    #[test]
    fn test_remote_error_carries_status() {
        let rendered = InvocationResult::RemoteError {
            message: "404 Not Found for url http://x/pet/9".to_string(),
            status: 404,
        }
        .render();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["status"], 404);
        assert!(!parsed["error"].as_str().unwrap().is_empty());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let rendered = InvocationResult::transport("connection refused").render();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["error"], "connection refused");
        assert!(parsed.get("status").is_none());
    }

    #[test]
    fn test_validation_renders_as_error_object() {
        let rendered = InvocationResult::validation("Must provide status, tags, or petId").render();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["error"], "Must provide status, tags, or petId");
    }
}
