//! MCP server: JSON-RPC method routing and the stdio serving loop.

use std::io::{BufRead, BufReader, Write};

use tracing::{debug, error, info};

use crate::catalog;
use crate::config::BridgeConfig;
use crate::dispatcher::Dispatcher;
use crate::error::{McpError, McpResult};
use crate::jsonrpc::{
    error_response, success_response, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    JSONRPC_VERSION,
};
use crate::mcp::{
    Implementation, InitializeRequest, InitializeResponse, ServerCapabilities, ToolsCallRequest,
    ToolsCallResponse, ToolsCapability, ToolsListRequest, ToolsListResponse,
    LATEST_PROTOCOL_VERSION, METHOD_INITIALIZE, METHOD_PING, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
    SUPPORTED_PROTOCOL_VERSIONS,
};

/// MCP Server: routes protocol methods to the catalog and the dispatcher.
pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(config: &BridgeConfig) -> McpResult<Self> {
        Ok(Self { dispatcher: Dispatcher::new(config)? })
    }

    /// Process a single MCP message. `None` means the message was a
    /// notification and no response is written.
    pub async fn process_message(&self, body: &[u8]) -> McpResult<Option<JsonRpcResponse>> {
        let request: JsonRpcRequest = serde_json::from_slice(body)?;
        debug!(method = %request.method, "processing request");

        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(Some(error_response(
                request.id,
                JsonRpcError::invalid_request()
                    .with_data(serde_json::json!({"message": "Invalid JSON-RPC version"})),
            )));
        }

        // Notifications carry no id and get no response
        if request.id.is_none() {
            debug!("notification received, ignoring");
            return Ok(None);
        }

        let response = match request.method.as_str() {
            METHOD_INITIALIZE => self.handle_initialize(&request)?,
            METHOD_PING => success_response(request.id.clone(), serde_json::json!({})),
            METHOD_TOOLS_LIST => self.handle_tools_list(&request)?,
            METHOD_TOOLS_CALL => self.handle_tools_call(&request).await?,
            _ => error_response(
                request.id,
                JsonRpcError::method_not_found()
                    .with_data(serde_json::json!({"method": request.method})),
            ),
        };

        Ok(Some(response))
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| McpError::InvalidParams("Missing params for initialize".to_string()))?;
        let init: InitializeRequest = serde_json::from_value(params.clone())?;

        // Echo a supported version, otherwise answer with the latest
        let protocol_version =
            if SUPPORTED_PROTOCOL_VERSIONS.contains(&init.protocol_version.as_str()) {
                init.protocol_version
            } else {
                LATEST_PROTOCOL_VERSION.to_string()
            };

        let response = InitializeResponse {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: None }),
            },
            server_info: Implementation {
                name: "DevDash MCP Bridge".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Inspect DevDash telemetry, warnings, logs and windows over the DevTools API"
                    .to_string(),
            ),
        };

        Ok(success_response(request.id.clone(), serde_json::to_value(response)?))
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let _params: ToolsListRequest = match &request.params {
            Some(params) => serde_json::from_value(params.clone())?,
            None => ToolsListRequest::default(),
        };

        let response = ToolsListResponse { tools: catalog::tools(), next_cursor: None };
        Ok(success_response(request.id.clone(), serde_json::to_value(response)?))
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let params = request
            .params
            .as_ref()
            .ok_or_else(|| McpError::InvalidParams("Missing params for tools/call".to_string()))?;
        let call: ToolsCallRequest = serde_json::from_value(params.clone())?;
        debug!(tool = %call.name, "calling tool");

        let arguments = call.arguments.unwrap_or_else(|| serde_json::json!({}));
        let content = self.dispatcher.dispatch(&call.name, &arguments).await;

        let response = ToolsCallResponse { content, is_error: None };
        Ok(success_response(request.id.clone(), serde_json::to_value(response)?))
    }
}

/// Serve MCP over stdio: one JSON-RPC message per line in, one response per
/// line out, logs on stderr only.
pub async fn serve_stdio(server: McpServer) -> McpResult<()> {
    info!("DevDash MCP bridge ready (stdio mode)");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in BufReader::new(stdin).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // MCP does not support JSON-RPC batch arrays
        if trimmed.starts_with('[') {
            error!("batch requests are not supported");
            let response = error_response(
                None,
                JsonRpcError::invalid_request()
                    .with_data(serde_json::json!({"message": "Batch requests are not supported"})),
            );
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
            continue;
        }

        match server.process_message(trimmed.as_bytes()).await {
            Ok(Some(response)) => {
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
            }
            Ok(None) => {}
            Err(e) => {
                error!("error processing message: {}", e);
                let response = error_response(None, e.to_jsonrpc_error());
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
            }
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
