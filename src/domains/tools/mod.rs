//! Tools domain module.
//!
//! Each petstore tool lives in its own file under `definitions/` and defines
//! its params, a pure routing function, an async executor and its MCP
//! metadata. `router.rs` assembles the rmcp ToolRouter for STDIO/TCP;
//! `registry.rs` is the catalog source of truth and the HTTP dispatcher.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
