//! Error types for the bridge.
//!
//! Two layers: [`McpError`] covers protocol-level faults that become JSON-RPC
//! error responses; [`DispatchError`] covers tool execution failures, which by
//! contract never become protocol faults. A `DispatchError`'s `Display` output
//! is exactly the text returned to the caller in a content block.

use crate::jsonrpc::JsonRpcError;
use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors at the JSON-RPC layer.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to a JSON-RPC error object
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            McpError::Serialization(e) => {
                JsonRpcError::parse_error().with_data(serde_json::json!({"message": e.to_string()}))
            }
            McpError::InvalidParams(msg) => {
                JsonRpcError::invalid_params().with_data(serde_json::json!({"message": msg}))
            }
            _ => JsonRpcError::internal_error()
                .with_data(serde_json::json!({"message": self.to_string()})),
        }
    }
}

/// Tool execution failures, classified. Every dispatch resolves one of these
/// into a single text content block; none escape the dispatcher.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Error: {0}")]
    InvalidArgument(String),

    #[error("Error: Cannot connect to DevDash. Make sure DevDash is running with the DevTools server enabled.")]
    ConnectionRefused,

    #[error("Error: HTTP {status} - {body}")]
    Backend { status: u16, body: String },

    #[error("Error: {0}")]
    Unexpected(String),
}
