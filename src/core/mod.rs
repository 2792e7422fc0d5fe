//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport protocols (HTTP, MCP).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Result records and API bodies
//! - **provider**: Outbound client for the IPinfo API
//! - **mapper**: Provider JSON to result records
//! - **tools**: Tool handlers and registry
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod mapper;
pub mod provider;
pub mod services;
pub mod tools;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IpInfoError, Result};
pub use services::Services;
