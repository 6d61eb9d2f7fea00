//! Petstore backend access.
//!
//! This module owns everything that touches the wire:
//!
//! - `request.rs` - the `OutboundRequest` value a tool's routing logic
//!   produces: one concrete (method, path, query, body) tuple per invocation
//! - `client.rs` - the executor that performs exactly one HTTP call per
//!   request with a fixed timeout and per-call client scoping
//! - `outcome.rs` - the `InvocationResult` union every call collapses into,
//!   and its rendering to the single string callers receive
//!
//! The backend itself is treated as opaque: no response is interpreted beyond
//! "JSON or not", and no call is ever retried.

mod client;
mod outcome;
mod request;

pub use client::{BackendClient, REQUEST_TIMEOUT};
pub use outcome::{InvocationResult, Payload};
pub use request::OutboundRequest;
