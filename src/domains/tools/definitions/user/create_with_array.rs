//! Batch user creation tool (array input endpoint).

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

/// Parameters for the `createuserswitharrayinput` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateUsersWithArrayInputParams {
    /// Array of user objects forwarded to the backend verbatim.
    #[schemars(description = "Array of user objects to create")]
    pub body: Value,
}

/// Create users from an input array.
#[derive(Debug, Clone)]
pub struct CreateUsersWithArrayInputTool;

impl CreateUsersWithArrayInputTool {
    pub const NAME: &'static str = "createuserswitharrayinput";
    pub const DESCRIPTION: &'static str =
        "Creates list of users with given input array [WRITES DATA]";

    pub fn route(params: &CreateUsersWithArrayInputParams) -> RouteDecision {
        Ok(OutboundRequest::post("/user/createWithArray").with_body(params.body.clone()))
    }

    pub async fn execute(
        params: &CreateUsersWithArrayInputParams,
        config: &Config,
    ) -> CallToolResult {
        info!("createuserswitharrayinput called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: CreateUsersWithArrayInputParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateUsersWithArrayInputParams>(),
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
                let params: CreateUsersWithArrayInputParams =
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
    use serde_json::json;

    #[test]
    fn test_route_forwards_array_body() {
        let params = CreateUsersWithArrayInputParams {
            body: json!([{"username": "user1"}, {"username": "user2"}]),
        };
        let request = CreateUsersWithArrayInputTool::route(&params).unwrap();
        assert_eq!(request.path, "/user/createWithArray");
        assert_eq!(
            request.body,
            Some(json!([{"username": "user1"}, {"username": "user2"}]))
        );
    }
}
