pub mod config;
pub mod error;

// GitHub gateway
pub mod github;

// Repository tools
pub mod tools;

// HTTP tool server
pub mod api;

// MCP tool server
pub mod mcp;

// Command-line interface
pub mod cli;

// Utilities
pub mod utils;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
