//! Pet form-style update tool.
//!
//! The request body carries only the optional fields the caller actually
//! supplied; the backend must never receive placeholder keys for fields that
//! were omitted.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::backend::OutboundRequest;
use crate::domains::tools::definitions::common::{PathId, RouteDecision, invoke, present};

/// Parameters for the `updatepetwithform` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetWithFormParams {
    /// Identifier of the pet to update.
    #[schemars(description = "ID of the pet to update")]
    pub pet_id: PathId,

    /// New name, included in the body only when supplied.
    #[serde(default)]
    #[schemars(description = "Updated name of the pet")]
    pub name: Option<String>,

    /// New status, included in the body only when supplied.
    #[serde(default)]
    #[schemars(description = "Updated status of the pet")]
    pub status: Option<String>,
}

/// Update a pet with form data.
#[derive(Debug, Clone)]
pub struct UpdatePetWithFormTool;

impl UpdatePetWithFormTool {
    pub const NAME: &'static str = "updatepetwithform";
    pub const DESCRIPTION: &'static str =
        "Updates a pet in the store with form data [WRITES DATA]";

    /// Build the body from present fields only; an all-absent body is
    /// omitted from the wire entirely.
    pub fn route(params: &UpdatePetWithFormParams) -> RouteDecision {
        let mut body = Map::new();
        if let Some(name) = present(&params.name) {
            body.insert("name".to_string(), Value::String(name.to_string()));
        }
        if let Some(status) = present(&params.status) {
            body.insert("status".to_string(), Value::String(status.to_string()));
        }
        Ok(OutboundRequest::post(format!("/pet/{}", params.pet_id)).with_body(Value::Object(body)))
    }

    pub async fn execute(params: &UpdatePetWithFormParams, config: &Config) -> CallToolResult {
        info!("updatepetwithform called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: UpdatePetWithFormParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdatePetWithFormParams>(),
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
                let params: UpdatePetWithFormParams =
                    serde_json::from_value(Value::Object(args))
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
    use serde_json::json;

    #[test]
    fn test_body_contains_only_supplied_fields() {
        let params = UpdatePetWithFormParams {
            pet_id: PathId::Number(1),
            name: Some("Rex".to_string()),
            status: None,
        };
        let request = UpdatePetWithFormTool::route(&params).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/pet/1");
        assert_eq!(request.body, Some(json!({"name": "Rex"})));
    }

    #[test]
    fn test_both_fields_present() {
        let params = UpdatePetWithFormParams {
            pet_id: PathId::Number(1),
            name: Some("New Name".to_string()),
            status: Some("sold".to_string()),
        };
        let request = UpdatePetWithFormTool::route(&params).unwrap();
        assert_eq!(request.body, Some(json!({"name": "New Name", "status": "sold"})));
    }

    #[test]
    fn test_no_fields_means_no_body() {
        let params = UpdatePetWithFormParams {
            pet_id: PathId::Number(1),
            name: None,
            status: Some(String::new()),
        };
        let request = UpdatePetWithFormTool::route(&params).unwrap();
        assert!(request.body.is_none());
    }
}
