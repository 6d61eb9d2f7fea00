//! Pet update tool (full-object PUT).

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
use crate::domains::backend::OutboundRequest;
use crate::domains::tools::definitions::common::{RouteDecision, invoke};

/// Parameters for the `updatepet` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdatePetParams {
    /// Full pet object forwarded to the backend verbatim.
    #[schemars(description = "Pet object with updated fields")]
    pub body: Value,
}

/// Update an existing pet.
#[derive(Debug, Clone)]
pub struct UpdatePetTool;

impl UpdatePetTool {
    pub const NAME: &'static str = "updatepet";
    pub const DESCRIPTION: &'static str = "Update an existing pet [WRITES DATA]";

    pub fn route(params: &UpdatePetParams) -> RouteDecision {
        Ok(OutboundRequest::put("/pet").with_body(params.body.clone()))
    }

    pub async fn execute(params: &UpdatePetParams, config: &Config) -> CallToolResult {
        info!("updatepet called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: UpdatePetParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdatePetParams>(),
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
                let params: UpdatePetParams = serde_json::from_value(Value::Object(args))
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
    fn test_route_is_put_pet() {
        let params = UpdatePetParams {
            body: json!({"id": 1, "name": "Updated Name", "status": "pending"}),
        };
        let request = UpdatePetTool::route(&params).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/pet");
        assert_eq!(
            request.body,
            Some(json!({"id": 1, "name": "Updated Name", "status": "pending"}))
        );
    }
}
