//! User update tool.

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

/// Parameters for the `updateuser` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateUserParams {
    /// Name of the user to update (path parameter).
    #[schemars(description = "Username identifying the user to update")]
    pub username: String,

    /// Updated user object forwarded to the backend verbatim.
    #[schemars(description = "User object with updated fields")]
    pub body: Value,
}

/// Update an existing user.
#[derive(Debug, Clone)]
pub struct UpdateUserTool;

impl UpdateUserTool {
    pub const NAME: &'static str = "updateuser";
    pub const DESCRIPTION: &'static str = "Updated user [WRITES DATA]";

    pub fn route(params: &UpdateUserParams) -> RouteDecision {
        Ok(OutboundRequest::put(format!("/user/{}", params.username))
            .with_body(params.body.clone()))
    }

    pub async fn execute(params: &UpdateUserParams, config: &Config) -> CallToolResult {
        info!("updateuser called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: UpdateUserParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UpdateUserParams>(),
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
                let params: UpdateUserParams = serde_json::from_value(Value::Object(args))
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
    fn test_username_lands_in_path() {
        let params = UpdateUserParams {
            username: "testuser".to_string(),
            body: json!({"email": "new@example.com"}),
        };
        let request = UpdateUserTool::route(&params).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/user/testuser");
        assert_eq!(request.body, Some(json!({"email": "new@example.com"})));
    }
}
