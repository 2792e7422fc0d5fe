//! MCP (Model Context Protocol) server module
//!
//! This module implements a JSON-RPC 2.0 compliant MCP server that
//! exposes the lookup tools to agent clients over stdio or
//! streamable HTTP.

pub mod error;
pub mod handlers;
pub mod protocol;
pub mod server;
pub mod streamable;
pub mod transport;

// Re-export main types
pub use error::McpError;
pub use handlers::ProtocolHandlers;
pub use server::McpServer;
