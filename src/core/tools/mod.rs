//! Lookup tools
//!
//! Each exposed lookup operation is a [`ToolHandler`] registered in
//! the [`ToolRegistry`]. Both transports (HTTP API and MCP) serve the
//! same registry.

pub mod handler;
pub mod ip_geo;
pub mod ip_lite;
pub mod ip_lookup;
pub mod registry;

pub use handler::{ip_input_schema, required_ip, ToolHandler};
pub use ip_geo::IpGeoHandler;
pub use ip_lite::IpLiteHandler;
pub use ip_lookup::IpLookupHandler;
pub use registry::ToolRegistry;
