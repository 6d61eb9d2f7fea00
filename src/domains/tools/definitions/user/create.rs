//! User creation tool.

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

/// Parameters for the `createuser` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateUserParams {
    /// User object forwarded to the backend verbatim.
    #[schemars(description = "User object to create")]
    pub body: Value,
}

/// Create a new user.
#[derive(Debug, Clone)]
pub struct CreateUserTool;

impl CreateUserTool {
    pub const NAME: &'static str = "createuser";
    pub const DESCRIPTION: &'static str = "Create user [WRITES DATA]";

    pub fn route(params: &CreateUserParams) -> RouteDecision {
        Ok(OutboundRequest::post("/user").with_body(params.body.clone()))
    }

    pub async fn execute(params: &CreateUserParams, config: &Config) -> CallToolResult {
        info!("createuser called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: CreateUserParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateUserParams>(),
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
                let params: CreateUserParams = serde_json::from_value(Value::Object(args))
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
    fn test_route_posts_user_body() {
        let params = CreateUserParams {
            body: json!({"username": "testuser", "email": "user@example.com"}),
        };
        let request = CreateUserTool::route(&params).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/user");
        assert_eq!(
            request.body,
            Some(json!({"username": "testuser", "email": "user@example.com"}))
        );
    }
}
