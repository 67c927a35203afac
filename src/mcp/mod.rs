//! MCP protocol implementation and server.

pub mod server;
pub mod tools;

pub use server::McpServer;
