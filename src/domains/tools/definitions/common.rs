//! Shared helpers for petstore tool definitions.
//!
//! Routing conventions common to every tool: presence means "supplied and
//! non-empty" (the original deployment treated empty strings as absent), and
//! identifiers may arrive as JSON numbers or strings depending on the caller.

use std::fmt;

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::domains::backend::{BackendClient, InvocationResult, OutboundRequest};

/// Outcome of a tool's routing step: exactly one concrete backend call, or
/// an already-formed error result when no call must be made.
pub type RouteDecision = Result<OutboundRequest, InvocationResult>;

/// Treat an optional string input as present only when non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Identifier that callers pass either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum PathId {
    Number(i64),
    Text(String),
}

impl PathId {
    /// An empty string identifier counts as absent.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Treat an optional identifier as present only when non-empty.
pub fn present_id(value: &Option<PathId>) -> Option<&PathId> {
    value.as_ref().filter(|id| !id.is_empty())
}

/// Run a route decision to completion: execute the backend call (acquiring a
/// fresh client scoped to it), or short-circuit on a routing error, then wrap
/// the rendered outcome as the tool's result.
pub async fn invoke(config: &Config, decision: RouteDecision) -> CallToolResult {
    let outcome = match decision {
        Ok(request) => {
            BackendClient::new(config.backend.clone())
                .execute(request)
                .await
        }
        Err(outcome) => outcome,
    };
    into_tool_result(outcome)
}

/// Wrap an invocation outcome as a CallToolResult carrying the single
/// rendered string.
pub fn into_tool_result(outcome: InvocationResult) -> CallToolResult {
    let rendered = outcome.render();
    if outcome.is_error() {
        CallToolResult::error(vec![Content::text(rendered)])
    } else {
        CallToolResult::success(vec![Content::text(rendered)])
    }
}

/// Shape a CallToolResult as the HTTP transport's tool-call payload.
#[cfg(feature = "http")]
pub fn http_payload(result: &CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_present_filters_empty_strings() {
        assert_eq!(present(&Some("available".to_string())), Some("available"));
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
    }

    #[test]
    fn test_path_id_accepts_number_or_string() {
        let numeric: PathId = serde_json::from_value(json!(7)).unwrap();
        let textual: PathId = serde_json::from_value(json!("7")).unwrap();
        assert_eq!(numeric.to_string(), "7");
        assert_eq!(textual.to_string(), "7");
    }

    #[test]
    fn test_present_id_filters_empty_text() {
        assert!(present_id(&Some(PathId::Text(String::new()))).is_none());
        assert!(present_id(&Some(PathId::Number(0))).is_some());
        assert!(present_id(&None).is_none());
    }

    #[test]
    fn test_error_outcome_marks_result() {
        let result = into_tool_result(InvocationResult::validation("missing input"));
        assert_eq!(result.is_error, Some(true));
    }
}
