use super::protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION, MCP_PROTOCOL_VERSION,
};
use crate::api::WordApi;
use crate::store::DocumentStore;
use crate::tools::{self, ToolOutput};
use serde::Deserialize;
use serde_json::{json, Value};

/// Handles MCP lifecycle and tool methods for one client session.
pub struct McpServer<S: DocumentStore> {
    api: WordApi<S>,
    name: String,
    initialized: bool,
}

#[derive(Debug, Deserialize)]
struct CallToolParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

impl<S: DocumentStore> McpServer<S> {
    pub fn new(api: WordApi<S>, name: impl Into<String>) -> Self {
        Self {
            api,
            name: name.into(),
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn api(&self) -> &WordApi<S> {
        &self.api
    }

    /// Handle one raw message line. Returns `None` for notifications and for
    /// responses sent by the client.
    pub fn handle_line(&mut self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("unparseable message: {}", e);
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ));
            }
        };
        self.handle_value(value)
    }

    pub fn handle_value(&mut self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);

        // Responses to server-initiated requests; nothing to answer.
        if value.get("method").is_none()
            && (value.get("result").is_some() || value.get("error").is_some())
        {
            return None;
        }

        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request),
            Err(e) => Some(JsonRpcResponse::failure(
                id,
                JsonRpcError::invalid_request(e),
            )),
        }
    }

    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        tracing::debug!(method = %request.method, "request");

        if request.is_notification() {
            self.handle_notification(&request.method);
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                id,
                JsonRpcError::invalid_request(format!(
                    "unsupported jsonrpc version '{}'",
                    request.jsonrpc
                )),
            ));
        }

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": tools::definitions() })),
            "tools/call" => self.call_tool(request.params),
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        })
    }

    fn handle_notification(&mut self, method: &str) {
        match method {
            "notifications/initialized" => {
                self.initialized = true;
                tracing::info!("client initialized");
            }
            other => tracing::debug!(method = other, "ignoring notification"),
        }
    }

    fn initialize(&self) -> Value {
        json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "serverInfo": {
                "name": self.name,
                "version": env!("CARGO_PKG_VERSION")
            }
        })
    }

    fn call_tool(&mut self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("missing params"))
            .and_then(|p| serde_json::from_value(p).map_err(JsonRpcError::invalid_params))?;

        let output = tools::call_tool(&mut self.api, &params.name, params.arguments);
        Ok(tool_result(&output))
    }
}

fn tool_result(output: &ToolOutput) -> Value {
    let content: Vec<Value> = output
        .content
        .iter()
        .map(|text| json!({ "type": "text", "text": text }))
        .collect();
    json!({ "content": content, "isError": output.is_error })
}
