//! devdash-mcp: MCP stdio bridge to the DevDash DevTools HTTP API.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use devdash_mcp::config::{BridgeConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use devdash_mcp::server::{serve_stdio, McpServer};

#[derive(Debug, Parser)]
#[command(name = "devdash-mcp", version, about = "MCP bridge to the DevDash DevTools HTTP API")]
struct Cli {
    /// Base URL of the DevTools HTTP server
    #[arg(long, env = "DEVDASH_DEVTOOLS_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout for backend calls, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = BridgeConfig::new(cli.base_url, cli.timeout_secs);
    info!(base_url = %config.base_url, timeout = ?config.timeout, "starting DevDash MCP bridge");

    let server = McpServer::new(&config)?;
    serve_stdio(server).await?;

    Ok(())
}
