//! MCP bridge exposing the DevDash DevTools HTTP API as MCP tools.
//!
//! The bridge speaks JSON-RPC 2.0 over stdio on the inbound side and issues
//! plain HTTP GETs against the DevTools server on the outbound side. Tools
//! are declared in [`catalog`], executed by the [`dispatcher`], and served by
//! [`server`].

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod jsonrpc;
pub mod mcp;
pub mod params;
pub mod server;

// Re-export key types
pub use config::BridgeConfig;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, McpError, McpResult};
pub use server::{serve_stdio, McpServer};
