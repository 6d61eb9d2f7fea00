//! Outbound request description.
//!
//! An `OutboundRequest` is the output of a tool's routing step: a single
//! concrete backend call, built fresh per invocation and never shared.

use reqwest::Method;
use serde_json::Value;

/// One concrete backend call: method, path, query parameters, optional body.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// HTTP method (the catalog only uses GET, POST and PUT).
    pub method: Method,

    /// Path appended to the configured base URL. May embed identifiers.
    pub path: String,

    /// Query parameters attached to the URL.
    pub query: Vec<(String, String)>,

    /// JSON body. `None` means no body is sent at all - an intentionally
    /// empty body must not reach the wire as `{}`.
    pub body: Option<Value>,
}

impl OutboundRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A GET request with no query and no body.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A POST request with no query and no body.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// A PUT request with no query and no body.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Attach a query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body, unless it is empty.
    ///
    /// Empty objects, empty arrays and null collapse to "no body", matching
    /// the backend contract for form-style updates where absent optional
    /// fields must not produce placeholder payloads.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = non_empty(body);
        self
    }
}

fn non_empty(body: Value) -> Option<Value> {
    match &body {
        Value::Null => None,
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        _ => Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_has_no_body_or_query() {
        let req = OutboundRequest::get("/store/inventory");
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/store/inventory");
        assert!(req.query.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let req = OutboundRequest::get("/user/login")
            .with_query("username", "u")
            .with_query("password", "p");
        assert_eq!(
            req.query,
            vec![
                ("username".to_string(), "u".to_string()),
                ("password".to_string(), "p".to_string())
            ]
        );
    }

    #[test]
    fn test_body_kept_when_non_empty() {
        let req = OutboundRequest::post("/pet").with_body(json!({"name": "Rex"}));
        assert_eq!(req.body, Some(json!({"name": "Rex"})));
    }

    #[test]
    fn test_empty_bodies_are_dropped() {
        assert!(OutboundRequest::post("/pet").with_body(json!({})).body.is_none());
        assert!(OutboundRequest::post("/pet").with_body(json!([])).body.is_none());
        assert!(
            OutboundRequest::post("/pet")
                .with_body(Value::Null)
                .body
                .is_none()
        );
    }
}
