//! ipinfo-mcp - IP geolocation and ASN lookup tools
//!
//! Exposes IPinfo lookups as a small set of tools over two
//! surfaces: a direct HTTP API and an MCP server.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types
//!   - provider (outbound IPinfo client)
//!   - mapper (provider JSON to result records)
//!   - tools (ip_geo, ip_lookup, ip_lite + registry)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error responses
//!
//! - **mcp**: MCP adapter (depends on core)
//!   - protocol, handlers, stdio server, streamable HTTP server

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// MCP (Model Context Protocol) adapter
pub mod mcp;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IpInfoError, Result};
pub use core::services::Services;
pub use core::types::*;
