//! Tool Router - builds the rmcp ToolRouter from the catalog.
//!
//! Each tool definition knows how to create its own route; this module only
//! assembles them, in the same registration order the registry advertises.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    AddPetTool, CreateUserTool, CreateUsersWithArrayInputTool, CreateUsersWithListInputTool,
    GetInventoryTool, SearchPetTool, SearchUserTool, UpdatePetTool, UpdatePetWithFormTool,
    UpdateUserTool, UploadFileTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddPetTool::create_route(config.clone()))
        .with_route(CreateUserTool::create_route(config.clone()))
        .with_route(CreateUsersWithArrayInputTool::create_route(config.clone()))
        .with_route(CreateUsersWithListInputTool::create_route(config.clone()))
        .with_route(GetInventoryTool::create_route(config.clone()))
        .with_route(SearchPetTool::create_route(config.clone()))
        .with_route(SearchUserTool::create_route(config.clone()))
        .with_route(UpdatePetTool::create_route(config.clone()))
        .with_route(UpdatePetWithFormTool::create_route(config.clone()))
        .with_route(UpdateUserTool::create_route(config.clone()))
        .with_route(UploadFileTool::create_route(config))
}
