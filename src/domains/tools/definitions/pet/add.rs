//! Pet creation tool.

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

/// Parameters for the `addpet` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddPetParams {
    /// Pet object forwarded to the backend verbatim.
    #[schemars(description = "Pet object to add to the store")]
    pub body: Value,
}

/// Add a new pet to the store.
#[derive(Debug, Clone)]
pub struct AddPetTool;

impl AddPetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "addpet";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add a new pet to the store [WRITES DATA]";

    /// Single fixed route; the supplied body is forwarded without filtering.
    pub fn route(params: &AddPetParams) -> RouteDecision {
        Ok(OutboundRequest::post("/pet").with_body(params.body.clone()))
    }

    /// Execute the tool logic.
    pub async fn execute(params: &AddPetParams, config: &Config) -> CallToolResult {
        info!("addpet called");
        invoke(config, Self::route(params)).await
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: AddPetParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddPetParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddPetParams = serde_json::from_value(Value::Object(args))
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
    fn test_route_forwards_body_verbatim() {
        let params = AddPetParams {
            body: json!({"name": "Fluffy", "photoUrls": ["http://example.com/fluffy.jpg"]}),
        };
        let request = AddPetTool::route(&params).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/pet");
        assert_eq!(
            request.body,
            Some(json!({"name": "Fluffy", "photoUrls": ["http://example.com/fluffy.jpg"]}))
        );
    }
}
