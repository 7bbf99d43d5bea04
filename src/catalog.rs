//! Static catalog of the tools exposed over MCP.
//!
//! Pure data: the same ordered sequence on every call. Order is declaration
//! order and carries no meaning beyond test stability.

use crate::mcp::{Tool, ToolInputSchema};
use serde_json::json;

fn no_args_schema() -> ToolInputSchema {
    ToolInputSchema {
        r#type: "object".to_string(),
        properties: Some(json!({})),
        required: Some(vec![]),
    }
}

/// Every tool the bridge supports, in declaration order.
pub fn tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_state".to_string(),
            description:
                "Get current telemetry state from DevDash (RPM, speed, temperatures, etc.)"
                    .to_string(),
            input_schema: no_args_schema(),
        },
        Tool {
            name: "get_warnings".to_string(),
            description: "Get active warnings and critical alerts from DevDash".to_string(),
            input_schema: no_args_schema(),
        },
        Tool {
            name: "list_windows".to_string(),
            description: "List available DevDash windows for screenshot capture".to_string(),
            input_schema: no_args_schema(),
        },
        Tool {
            name: "get_logs".to_string(),
            description:
                "Retrieve recent application logs from DevDash with filtering by level and category"
                    .to_string(),
            input_schema: ToolInputSchema {
                r#type: "object".to_string(),
                properties: Some(json!({
                    "count": {
                        "type": "integer",
                        "description": "Number of log entries to retrieve (max 1000, default 100)",
                        "default": 100,
                    },
                    "level": {
                        "type": "string",
                        "description": "Minimum log level to include (debug, info, warning, critical)",
                        "enum": ["debug", "info", "warning", "critical"],
                        "default": "info",
                    },
                    "category": {
                        "type": "string",
                        "description": "Filter by category (e.g., 'devdash.broker', 'devdash.adapter')",
                        "default": "",
                    },
                })),
                required: Some(vec![]),
            },
        },
        Tool {
            name: "screenshot".to_string(),
            description: "Capture PNG screenshot of a DevDash window".to_string(),
            input_schema: ToolInputSchema {
                r#type: "object".to_string(),
                properties: Some(json!({
                    "window": {
                        "type": "string",
                        "description": "Window name to capture (e.g., 'cluster', 'headunit')",
                    },
                })),
                required: Some(vec!["window".to_string()]),
            },
        },
    ]
}
