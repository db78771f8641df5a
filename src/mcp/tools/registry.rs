//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per MCP spec.

use log::debug;
use serde::Serialize;
use serde_json::Value;

use crate::daemon::{DaemonRecord, ProfileField};
use crate::mcp::content::ToolResult;

use super::profile;

/// Rendered when a call resolves to nothing: unknown tool name or a known
/// tool whose field is absent. Both degrade to this sentinel instead of a
/// protocol error.
pub const NO_DATA: &str = "No data available";

/// Tool descriptor conforming to MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    /// List all available tools: one per profile field, then the aggregate.
    /// Declaration order, stable across calls.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        let mut tools: Vec<ToolDescriptor> = ProfileField::ALL
            .into_iter()
            .map(profile::field_descriptor)
            .collect();
        tools.push(profile::get_all_descriptor());
        tools
    }

    /// Call a tool by name against a freshly parsed record.
    pub fn call_tool(&self, name: &str, record: &DaemonRecord) -> ToolResult {
        if name == profile::GET_ALL_TOOL {
            let text =
                serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string());
            return ToolResult::text(text);
        }

        let rendered = ProfileField::from_tool_name(name)
            .and_then(|field| record.get(field))
            .map(|value| value.render());

        match rendered {
            Some(text) => ToolResult::text(text),
            None => {
                debug!("tool '{}' resolved to no data", name);
                ToolResult::text(NO_DATA)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    fn record() -> DaemonRecord {
        let mut rec = DaemonRecord::empty(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        rec.about = Some("A text profile server".to_string());
        rec.preferences = Some(vec!["x".to_string(), "y".to_string()]);
        rec
    }

    #[test]
    fn test_list_tools_order_is_stable() {
        let registry = ToolRegistry::new();
        let first: Vec<String> = registry.list_tools().into_iter().map(|t| t.name).collect();
        let second: Vec<String> = registry.list_tools().into_iter().map(|t| t.name).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 11);
        assert_eq!(first[0], "get_about");
        assert_eq!(first.last().map(String::as_str), Some("get_all"));
    }

    #[test]
    fn test_call_scalar_tool() {
        let result = ToolRegistry::new().call_tool("get_about", &record());
        assert!(!result.is_error);
        assert_eq!(result.content[0].text, "A text profile server");
    }

    #[test]
    fn test_call_list_tool_joins_items() {
        let result = ToolRegistry::new().call_tool("get_preferences", &record());
        assert_eq!(result.content[0].text, "x\ny");
    }

    #[test]
    fn test_absent_field_renders_sentinel() {
        let result = ToolRegistry::new().call_tool("get_mission", &record());
        assert!(!result.is_error);
        assert_eq!(result.content[0].text, NO_DATA);
    }

    #[test]
    fn test_unknown_tool_renders_sentinel() {
        let result = ToolRegistry::new().call_tool("get_shoe_size", &record());
        assert!(!result.is_error);
        assert_eq!(result.content[0].text, NO_DATA);
    }

    #[test]
    fn test_get_all_round_trips_presence_and_values() {
        let rec = record();
        let result = ToolRegistry::new().call_tool("get_all", &rec);
        let value: Value = serde_json::from_str(&result.content[0].text).unwrap();
        let obj = value.as_object().unwrap();

        for field in ProfileField::ALL {
            let key = field.section_key();
            match rec.get(field) {
                Some(present) => assert_eq!(
                    obj.get(key)
                        .map(|v| match v {
                            Value::String(s) => s.clone(),
                            Value::Array(items) => items
                                .iter()
                                .map(|i| i.as_str().unwrap().to_string())
                                .collect::<Vec<_>>()
                                .join("\n"),
                            other => panic!("unexpected value for {}: {}", key, other),
                        }),
                    Some(present.render())
                ),
                None => assert!(!obj.contains_key(key), "{} should be omitted", key),
            }
        }
        assert_eq!(obj.get("last_updated").unwrap(), &rec.last_updated);
    }
}
