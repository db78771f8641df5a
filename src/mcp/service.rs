//! MCP Service - Core JSON-RPC 2.0 request handler.

use std::sync::Arc;

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::daemon::{DaemonParser, DocumentSource};
use crate::mcp::rpc::{OutboundResponse, RpcRequest};
use crate::mcp::tools::registry::ToolDescriptor;
use crate::mcp::tools::ToolRegistry;

/// Core MCP request handler. Each call acquires and parses the daemon
/// document fresh; nothing is cached across requests.
#[derive(Clone)]
pub struct McpService {
    registry: ToolRegistry,
    parser: DaemonParser,
    source: Arc<dyn DocumentSource>,
}

impl McpService {
    pub fn new(
        registry: ToolRegistry,
        parser: DaemonParser,
        source: Arc<dyn DocumentSource>,
    ) -> Self {
        Self {
            registry,
            parser,
            source,
        }
    }

    pub fn handle_request(&self, request: RpcRequest) -> OutboundResponse {
        let RpcRequest {
            method, params, id, ..
        } = request;

        match method.as_str() {
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => self.handle_call_tool(id, params),
            other => {
                warn!("unknown rpc method: {}", other);
                OutboundResponse::method_not_found(id)
            }
        }
    }

    fn handle_list_tools(&self, id: Option<Value>) -> OutboundResponse {
        let payload = ListToolsResult {
            tools: self.registry.list_tools(),
        };

        match serde_json::to_value(payload) {
            Ok(result) => OutboundResponse::success(id, result),
            Err(_) => OutboundResponse::internal_error(),
        }
    }

    fn handle_call_tool(&self, id: Option<Value>, params: Option<Value>) -> OutboundResponse {
        // Missing or malformed params degrade to an unresolvable tool name,
        // which the registry answers with its sentinel.
        let parsed: CallToolParams = params
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        let record = self.parser.parse(&self.load_document());
        let result = self.registry.call_tool(&parsed.name, &record);

        match serde_json::to_value(result) {
            Ok(result) => OutboundResponse::success(id, result),
            Err(_) => OutboundResponse::internal_error(),
        }
    }

    /// Acquire the document text, degrading to the empty document when no
    /// candidate source is readable.
    fn load_document(&self) -> String {
        match self.source.load() {
            Ok(text) => text,
            Err(err) => {
                warn!("daemon document unavailable: {}", err);
                String::new()
            }
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct CallToolParams {
    #[serde(default)]
    name: String,
    /// Accepted for envelope compatibility; no tool takes arguments.
    #[serde(default)]
    #[allow(dead_code)]
    arguments: Option<Value>,
}

#[derive(Debug, Serialize)]
struct ListToolsResult {
    tools: Vec<ToolDescriptor>,
}
