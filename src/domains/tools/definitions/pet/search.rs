//! Pet lookup tool with overloaded inputs.
//!
//! One tool, three possible backend endpoints. The routing precedence is
//! strict so behavior is reproducible: an identifier beats a status filter,
//! a status filter beats a tag filter, and with no criterion at all no
//! backend call is made.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::backend::{InvocationResult, OutboundRequest};
use crate::domains::tools::definitions::common::{PathId, RouteDecision, invoke, present, present_id};

/// Parameters for the `search_pet` tool. All inputs are optional; the caller
/// may supply any subset.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchPetParams {
    /// Status filter (e.g. "available", "pending", "sold").
    #[serde(default)]
    #[schemars(description = "Filter pets by status")]
    pub status: Option<String>,

    /// Comma-separated tag filter.
    #[serde(default)]
    #[schemars(description = "Filter pets by tags")]
    pub tags: Option<String>,

    /// Direct lookup by pet identifier. Takes precedence over the filters.
    #[serde(default)]
    #[schemars(description = "Look up a single pet by ID (overrides status and tags)")]
    pub pet_id: Option<PathId>,
}

/// Search or list pets.
#[derive(Debug, Clone)]
pub struct SearchPetTool;

impl SearchPetTool {
    pub const NAME: &'static str = "search_pet";
    pub const DESCRIPTION: &'static str = "Search or list pet with flexible filtering.";

    /// Resolve the supplied inputs to exactly one backend call.
    ///
    /// Precedence: petId, then status, then tags. With none present the
    /// decision is a validation error and no call is issued.
    pub fn route(params: &SearchPetParams) -> RouteDecision {
        if let Some(id) = present_id(&params.pet_id) {
            return Ok(OutboundRequest::get(format!("/pet/{id}")));
        }
        if let Some(status) = present(&params.status) {
            return Ok(OutboundRequest::get("/pet/findByStatus").with_query("status", status));
        }
        if let Some(tags) = present(&params.tags) {
            return Ok(OutboundRequest::get("/pet/findByTags").with_query("tags", tags));
        }
        Err(InvocationResult::validation(
            "Must provide status, tags, or petId",
        ))
    }

    pub async fn execute(params: &SearchPetParams, config: &Config) -> CallToolResult {
        info!("search_pet called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: SearchPetParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPetParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SearchPetParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn params(status: Option<&str>, tags: Option<&str>, pet_id: Option<PathId>) -> SearchPetParams {
        SearchPetParams {
            status: status.map(String::from),
            tags: tags.map(String::from),
            pet_id,
        }
    }

    #[test]
    fn test_pet_id_takes_precedence_over_everything() {
        let request = SearchPetTool::route(&params(
            Some("available"),
            Some("friendly"),
            Some(PathId::Number(1)),
        ))
        .unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/pet/1");
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_string_pet_id_lands_in_path() {
        let request =
            SearchPetTool::route(&params(None, None, Some(PathId::Text("42".to_string()))))
                .unwrap();
        assert_eq!(request.path, "/pet/42");
    }

    #[test]
    fn test_status_beats_tags() {
        let request =
            SearchPetTool::route(&params(Some("available"), Some("friendly"), None)).unwrap();
        assert_eq!(request.path, "/pet/findByStatus");
        assert_eq!(
            request.query,
            vec![("status".to_string(), "available".to_string())]
        );
    }

    #[test]
    fn test_tags_route_when_alone() {
        let request = SearchPetTool::route(&params(None, Some("friendly"), None)).unwrap();
        assert_eq!(request.path, "/pet/findByTags");
        assert_eq!(
            request.query,
            vec![("tags".to_string(), "friendly".to_string())]
        );
    }

    #[test]
    fn test_no_criterion_is_a_validation_error() {
        let decision = SearchPetTool::route(&params(None, None, None));
        assert_eq!(
            decision.unwrap_err(),
            InvocationResult::validation("Must provide status, tags, or petId")
        );
    }

    #[test]
    fn test_empty_strings_count_as_absent() {
        let decision = SearchPetTool::route(&params(
            Some(""),
            Some(""),
            Some(PathId::Text(String::new())),
        ));
        assert!(decision.is_err());
    }
}
