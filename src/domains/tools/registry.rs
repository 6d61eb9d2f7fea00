//! Tool Registry - central registration and dispatch for all tools.
//!
//! The catalog is fixed at compile time and read-only at runtime: eleven
//! petstore tools, enumerated in registration order. Dispatch matches on the
//! exact tool name; an unregistered name is an error, never a panic, and a
//! failed invocation never affects any other.

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;

use super::definitions::{
    AddPetTool, CreateUserTool, CreateUsersWithArrayInputTool, CreateUsersWithListInputTool,
    GetInventoryTool, SearchPetTool, SearchUserTool, UpdatePetTool, UpdatePetWithFormTool,
    UpdateUserTool, UploadFileTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages the fixed petstore tool catalog.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    config: Arc<Config>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// All tool names, in registration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddPetTool::NAME,
            CreateUserTool::NAME,
            CreateUsersWithArrayInputTool::NAME,
            CreateUsersWithListInputTool::NAME,
            GetInventoryTool::NAME,
            SearchPetTool::NAME,
            SearchUserTool::NAME,
            UpdatePetTool::NAME,
            UpdatePetWithFormTool::NAME,
            UpdateUserTool::NAME,
            UploadFileTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata), in registration order.
    ///
    /// This is the single source of truth for the advertised catalog. Both
    /// HTTP and STDIO/TCP transports use it; enumeration performs no I/O.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AddPetTool::to_tool(),
            CreateUserTool::to_tool(),
            CreateUsersWithArrayInputTool::to_tool(),
            CreateUsersWithListInputTool::to_tool(),
            GetInventoryTool::to_tool(),
            SearchPetTool::to_tool(),
            SearchUserTool::to_tool(),
            UpdatePetTool::to_tool(),
            UpdatePetWithFormTool::to_tool(),
            UpdateUserTool::to_tool(),
            UploadFileTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let config = self.config.clone();
        match name {
            AddPetTool::NAME => AddPetTool::http_handler(arguments, config).await,
            CreateUserTool::NAME => CreateUserTool::http_handler(arguments, config).await,
            CreateUsersWithArrayInputTool::NAME => {
                CreateUsersWithArrayInputTool::http_handler(arguments, config).await
            }
            CreateUsersWithListInputTool::NAME => {
                CreateUsersWithListInputTool::http_handler(arguments, config).await
            }
            GetInventoryTool::NAME => GetInventoryTool::http_handler(arguments, config).await,
            SearchPetTool::NAME => SearchPetTool::http_handler(arguments, config).await,
            SearchUserTool::NAME => SearchUserTool::http_handler(arguments, config).await,
            UpdatePetTool::NAME => UpdatePetTool::http_handler(arguments, config).await,
            UpdatePetWithFormTool::NAME => {
                UpdatePetWithFormTool::http_handler(arguments, config).await
            }
            UpdateUserTool::NAME => UpdateUserTool::http_handler(arguments, config).await,
            UploadFileTool::NAME => UploadFileTool::http_handler(arguments, config).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(format!("Unknown tool: {}", name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_config());
        let names = registry.tool_names();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"addpet"));
        assert!(names.contains(&"createuser"));
        assert!(names.contains(&"createuserswitharrayinput"));
        assert!(names.contains(&"createuserswithlistinput"));
        assert!(names.contains(&"getinventory"));
        assert!(names.contains(&"search_pet"));
        assert!(names.contains(&"search_user"));
        assert!(names.contains(&"updatepet"));
        assert!(names.contains(&"updatepetwithform"));
        assert!(names.contains(&"updateuser"));
        assert!(names.contains(&"uploadfile"));
    }

    #[test]
    fn test_registry_names_are_unique() {
        let registry = ToolRegistry::new(test_config());
        let mut names = registry.tool_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_catalog_order_matches_registration() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(
            names,
            vec![
                "addpet",
                "createuser",
                "createuserswitharrayinput",
                "createuserswithlistinput",
                "getinventory",
                "search_pet",
                "search_user",
                "updatepet",
                "updatepetwithform",
                "updateuser",
                "uploadfile",
            ]
        );
    }

    #[test]
    fn test_every_tool_has_a_description() {
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(!description.is_empty(), "tool {} lacks description", tool.name);
        }
    }

    #[test]
    fn test_write_tools_are_marked() {
        let read_only = ["getinventory", "search_pet", "search_user"];
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            if read_only.contains(&tool.name.as_ref()) {
                assert!(!description.contains("[WRITES DATA]"), "{}", tool.name);
            } else {
                assert!(description.contains("[WRITES DATA]"), "{}", tool.name);
            }
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_config());
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_rejects_bad_arguments() {
        let registry = ToolRegistry::new(test_config());
        // updateuser requires username and body
        let result = registry.call_tool("updateuser", serde_json::json!({})).await;
        assert!(result.is_err());
    }
}
