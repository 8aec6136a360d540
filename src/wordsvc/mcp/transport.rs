use super::protocol::{JsonRpcError, JsonRpcResponse};
use super::server::McpServer;
use crate::error::Result;
use crate::store::DocumentStore;
use serde_json::Value;
use std::io::{BufRead, Write};

/// Newline-delimited JSON-RPC framing over any reader/writer pair.
///
/// `serve()` uses the process stdin/stdout; tests drive it with in-memory
/// buffers.
pub struct StdioTransport<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl StdioTransport<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Serve requests until the reader reaches EOF.
    ///
    /// A line that is not valid UTF-8 gets a parse error reply like any other
    /// unparseable message.
    pub fn run<S: DocumentStore>(&mut self, server: &mut McpServer<S>) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("input closed, shutting down");
                return Ok(());
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let message = line.trim();
                    if message.is_empty() {
                        continue;
                    }
                    server.handle_line(message)
                }
                Err(e) => {
                    tracing::warn!("message is not valid UTF-8: {}", e);
                    Some(JsonRpcResponse::failure(
                        Value::Null,
                        JsonRpcError::parse_error(e),
                    ))
                }
            };

            if let Some(response) = response {
                self.write_response(&response)?;
            }
        }
    }

    fn write_response(&mut self, response: &JsonRpcResponse) -> Result<()> {
        let encoded = serde_json::to_string(response)?;
        self.writer.write_all(encoded.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
