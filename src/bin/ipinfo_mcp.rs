//! IPinfo MCP (Model Context Protocol) Server
//!
//! Exposes the lookup tools to MCP clients over stdio (default) or
//! streamable HTTP.
//!
//! ```bash
//! ipinfo-mcp                  # stdio
//! ipinfo-mcp streamable-http  # POST http://127.0.0.1:5555/mcp
//! ```

use clap::{Parser, ValueEnum};
use ipinfo_mcp::core::config::Config;
use ipinfo_mcp::core::services::Services;
use ipinfo_mcp::mcp::{streamable, McpServer};
use std::sync::Arc;

/// IPinfo lookup tools for MCP clients
#[derive(Parser, Debug)]
#[command(name = "ipinfo-mcp")]
#[command(version)]
#[command(about = "IP geolocation and ASN lookup MCP server", long_about = None)]
struct Cli {
    /// Transport to serve
    #[arg(value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Transport {
    /// Newline-delimited JSON-RPC on stdin/stdout
    Stdio,
    /// JSON-RPC over HTTP POST with event-stream replies
    StreamableHttp,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ipinfo_mcp=info,tower_http=info".into()),
        )
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            eprintln!("Failed to initialize services: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.transport {
        Transport::Stdio => McpServer::new(services).run().await,
        Transport::StreamableHttp => streamable::serve(services).await,
    };

    if let Err(e) = result {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
