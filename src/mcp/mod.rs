//! MCP (Model Context Protocol) Module
//!
//! Serves the daemon profile over JSON-RPC 2.0 per the MCP tool-calling
//! convention.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
