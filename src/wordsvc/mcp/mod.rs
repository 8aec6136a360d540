//! # MCP Server
//!
//! Exposes the tool surface over the Model Context Protocol: JSON-RPC 2.0
//! messages, one per line, on stdin/stdout.
//!
//! ```text
//! stdin ──▶ StdioTransport ──▶ McpServer ──▶ tools::call_tool ──▶ WordApi
//!   ▲            (framing)      (lifecycle,                          │
//!   │                            methods)                            │
//! stdout ◀───────────────────── JSON-RPC response ◀──────────────────┘
//! ```
//!
//! Requests are handled one at a time, in arrival order. A failing request
//! produces an error response (or an `isError` tool result); it never stops
//! the loop. The loop ends when stdin reaches EOF.
//!
//! Targets protocol version 2024-11-05.

pub mod protocol;
pub mod server;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::StdioTransport;
