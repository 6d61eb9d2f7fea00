//! User lookup tool with overloaded inputs.
//!
//! Precedence: a username means a direct user lookup; otherwise a password
//! selects the login endpoint; with neither input the tool calls logout.
//!
//! The login branch is guarded by `password` alone even though the backend's
//! login endpoint expects both credentials. That guard is reproduced from the
//! deployed behavior on purpose - the call is forwarded with whatever subset
//! was supplied rather than rejected here, because the intended semantics are
//! ambiguous upstream.

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
use crate::domains::tools::definitions::common::{RouteDecision, invoke, present};

/// Parameters for the `search_user` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchUserParams {
    /// Username for a direct lookup. Takes precedence over `password`.
    #[serde(default)]
    #[schemars(description = "Username to look up directly")]
    pub username: Option<String>,

    /// Password; without a username this selects the login endpoint.
    #[serde(default)]
    #[schemars(description = "Password for login")]
    pub password: Option<String>,
}

/// Search users, or log in/out.
#[derive(Debug, Clone)]
pub struct SearchUserTool;

impl SearchUserTool {
    pub const NAME: &'static str = "search_user";
    pub const DESCRIPTION: &'static str = "Search or list user with flexible filtering.";

    /// Resolve the supplied inputs to exactly one backend call.
    pub fn route(params: &SearchUserParams) -> RouteDecision {
        if let Some(username) = present(&params.username) {
            return Ok(OutboundRequest::get(format!("/user/{username}")));
        }
        if let Some(password) = present(&params.password) {
            // Only a missing username key is dropped from the query; an
            // empty-string username still goes over the wire, as observed.
            let mut request = OutboundRequest::get("/user/login");
            if let Some(username) = params.username.as_deref() {
                request = request.with_query("username", username);
            }
            return Ok(request.with_query("password", password));
        }
        Ok(OutboundRequest::get("/user/logout"))
    }

    pub async fn execute(params: &SearchUserParams, config: &Config) -> CallToolResult {
        info!("search_user called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: SearchUserParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchUserParams>(),
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
                let params: SearchUserParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &config).await)
            }
            .boxed()
        })
    }
}
