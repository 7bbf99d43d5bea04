//! Tool dispatch: argument coercion, the backend HTTP call, and response
//! decoding into content blocks.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::BridgeConfig;
use crate::error::{DispatchError, McpError, McpResult};
use crate::mcp::ContentBlock;
use crate::params::{LogsQuery, ScreenshotParams};

/// Executes tool invocations against the DevTools HTTP API.
///
/// Stateless between invocations: only the immutable base address and a
/// shared `reqwest::Client` (which carries the per-request timeout) live
/// here, so concurrent dispatches are safe.
pub struct Dispatcher {
    client: reqwest::Client,
    base_url: Url,
}

impl Dispatcher {
    pub fn new(config: &BridgeConfig) -> McpResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            McpError::Config(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| McpError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Execute one invocation to completion. Always yields at least one
    /// content block; every failure is rendered as a text block.
    pub async fn dispatch(&self, name: &str, arguments: &Value) -> Vec<ContentBlock> {
        match self.try_dispatch(name, arguments).await {
            Ok(content) => content,
            Err(err) => vec![ContentBlock::text(err.to_string())],
        }
    }

    async fn try_dispatch(
        &self,
        name: &str,
        arguments: &Value,
    ) -> Result<Vec<ContentBlock>, DispatchError> {
        match name {
            "get_state" => self.fetch_json("/api/state", &[]).await,
            "get_warnings" => self.fetch_json("/api/warnings", &[]).await,
            "list_windows" => self.fetch_json("/api/windows", &[]).await,
            "get_logs" => {
                let query = LogsQuery::from_arguments(arguments);
                self.fetch_json("/api/logs", &query.to_query()).await
            }
            "screenshot" => {
                let params = ScreenshotParams::from_arguments(arguments)?;
                self.fetch_image("/api/screenshot", &[("window", params.window)]).await
            }
            other => Err(DispatchError::UnknownTool(other.to_string())),
        }
    }

    /// The single network hop. Non-2xx statuses become `Backend` errors with
    /// the raw body preserved verbatim.
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, DispatchError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| DispatchError::Unexpected(e.to_string()))?;
        debug!(%url, "issuing backend request");

        let response = self.client.get(url).query(query).send().await.map_err(classify)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Backend { status: status.as_u16(), body });
        }
        Ok(response)
    }

    async fn fetch_json(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<ContentBlock>, DispatchError> {
        let response = self.get(path, query).await?;
        let data: Value = response.json().await.map_err(classify)?;
        let text = serde_json::to_string_pretty(&data)
            .map_err(|e| DispatchError::Unexpected(e.to_string()))?;
        Ok(vec![ContentBlock::text(text)])
    }

    async fn fetch_image(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<ContentBlock>, DispatchError> {
        let response = self.get(path, query).await?;
        let bytes = response.bytes().await.map_err(classify)?;
        Ok(vec![ContentBlock::image(BASE64.encode(&bytes), "image/png")])
    }
}

/// Map transport failures onto the dispatch taxonomy. Connection refusal gets
/// its own user-actionable message; everything else (timeouts, decode errors)
/// falls through to the catch-all.
fn classify(err: reqwest::Error) -> DispatchError {
    if err.is_connect() {
        DispatchError::ConnectionRefused
    } else {
        DispatchError::Unexpected(err.to_string())
    }
}
