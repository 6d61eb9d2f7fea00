//! Petstore MCP Server Library
//!
//! This crate exposes the Swagger Petstore REST API as a set of Model Context
//! Protocol (MCP) tools, organized with a modular architecture by domains.
//!
//! # Architecture
//!
//! - **core**: Infrastructure - configuration, error handling, the server
//!   handler, and the transport layer (stdio/tcp/http behind feature flags)
//! - **domains**: Business logic organized by bounded contexts
//!   - **backend**: Outbound HTTP plumbing for the petstore REST API
//!   - **tools**: The MCP tool catalog, one file per tool
//!
//! # Example
//!
//! ```rust,no_run
//! use petstore_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
