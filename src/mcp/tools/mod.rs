//! MCP tools: the profile query catalogue and its registry.
//!
//! Every tool is a parameterless query resolving to one record field, plus
//! the aggregate `get_all` tool that returns the whole record.

pub mod profile;
pub mod registry;

pub use registry::ToolRegistry;
