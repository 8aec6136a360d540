//! # wordsvc Architecture
//!
//! wordsvc exposes a small set of Word (`.docx`) editing operations as MCP tools.
//! All format work (zip packaging, WordprocessingML) is delegated to `docx-rs`;
//! this crate owns filename handling, precondition checks, message formatting
//! and the protocol plumbing.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - clap parsing, logging setup, exit codes                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  MCP (mcp/)  +  Tool surface (tools.rs)                     │
//! │  - JSON-RPC framing and lifecycle                           │
//! │  - JSON arguments in, wire text out                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) → Commands (commands/*.rs)                    │
//! │  - Typed arguments, Result<CmdResult> returns               │
//! │  - Validation and business rules                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - DocumentStore trait                                      │
//! │  - FileStore (docx-rs), InMemoryStore (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Failures are `Err(WordError)` values; the tool layer turns
//! them into `Error: ...` text.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`, where most coverage lives.
//! 2. **Store**: `FileStore` round trips in temporary directories.
//! 3. **Tools / MCP**: dispatch, argument decoding and JSON-RPC shapes.
//! 4. **Binary**: end-to-end stdio sessions in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Block` and `HeadingLevel`
//! - [`filename`]: Extension normalization and character validation
//! - [`tools`]: Tool definitions and dispatch
//! - [`mcp`]: JSON-RPC server and stdio transport
//! - [`config`]: Configuration file handling
//! - [`logging`]: tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filename;
pub mod logging;
pub mod mcp;
pub mod model;
pub mod store;
pub mod tools;
