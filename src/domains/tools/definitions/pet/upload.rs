//! Pet image upload tool.
//!
//! Same include-only-if-present body construction as the form update.

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

/// Parameters for the `uploadfile` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileParams {
    /// Identifier of the pet the image belongs to.
    #[schemars(description = "ID of the pet to attach the image to")]
    pub pet_id: PathId,

    /// Extra metadata, included in the body only when supplied.
    #[serde(default)]
    #[schemars(description = "Additional metadata to pass to the server")]
    pub additional_metadata: Option<String>,

    /// File reference, included in the body only when supplied.
    #[serde(default)]
    #[schemars(description = "File to upload")]
    pub file: Option<String>,
}

/// Upload a pet image.
#[derive(Debug, Clone)]
pub struct UploadFileTool;

impl UploadFileTool {
    pub const NAME: &'static str = "uploadfile";
    pub const DESCRIPTION: &'static str = "uploads an image [WRITES DATA]";

    pub fn route(params: &UploadFileParams) -> RouteDecision {
        let mut body = Map::new();
        if let Some(metadata) = present(&params.additional_metadata) {
            body.insert(
                "additionalMetadata".to_string(),
                Value::String(metadata.to_string()),
            );
        }
        if let Some(file) = present(&params.file) {
            body.insert("file".to_string(), Value::String(file.to_string()));
        }
        Ok(
            OutboundRequest::post(format!("/pet/{}/uploadImage", params.pet_id))
                .with_body(Value::Object(body)),
        )
    }

    pub async fn execute(params: &UploadFileParams, config: &Config) -> CallToolResult {
        info!("uploadfile called");
        invoke(config, Self::route(params)).await
    }

    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: Value, config: Arc<Config>) -> Result<Value, String> {
        let params: UploadFileParams =
            serde_json::from_value(arguments).map_err(|e| format!("Invalid arguments: {e}"))?;
        let result = Self::execute(&params, &config).await;
        Ok(super::super::common::http_payload(&result))
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UploadFileParams>(),
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
                let params: UploadFileParams = serde_json::from_value(Value::Object(args))
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
    fn test_path_embeds_pet_id() {
        let params = UploadFileParams {
            pet_id: PathId::Number(1),
            additional_metadata: None,
            file: Some("test.jpg".to_string()),
        };
        let request = UploadFileTool::route(&params).unwrap();
        assert_eq!(request.path, "/pet/1/uploadImage");
        assert_eq!(request.body, Some(json!({"file": "test.jpg"})));
    }

    #[test]
    fn test_absent_fields_omitted_from_body() {
        let params = UploadFileParams {
            pet_id: PathId::Text("7".to_string()),
            additional_metadata: Some("profile shot".to_string()),
            file: None,
        };
        let request = UploadFileTool::route(&params).unwrap();
        assert_eq!(
            request.body,
            Some(json!({"additionalMetadata": "profile shot"}))
        );
    }

    #[test]
    fn test_no_optional_fields_means_no_body() {
        let params = UploadFileParams {
            pet_id: PathId::Number(1),
            additional_metadata: None,
            file: None,
        };
        let request = UploadFileTool::route(&params).unwrap();
        assert!(request.body.is_none());
    }
}
