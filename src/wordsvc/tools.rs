//! # Tool Surface
//!
//! Maps named tool calls with JSON arguments onto the [`WordApi`] and renders
//! the outcome as wire text.
//!
//! Internally every command returns `Result<CmdResult>`. Here both arms are
//! flattened into a [`ToolOutput`]: a list of text items plus an `is_error`
//! flag. Error text always starts with `Error`, so clients that only look at
//! the text can still tell failures apart.
//!
//! ## Tools
//!
//! | Name | Arguments |
//! |------|-----------|
//! | `health_check` | none |
//! | `create_word_document` | `filename`, `title?` |
//! | `read_document_content` | `filename` |
//! | `add_paragraph` | `filename`, `text` |
//! | `add_heading` | `filename`, `text`, `level?` (default 1) |
//! | `list_available_word_documents` | `directory?` (default `.`) |
//!
//! `create_document` is accepted as an alias of `create_word_document`.

use crate::api::{CmdResult, WordApi};
use crate::error::{Result, WordError};
use crate::store::DocumentStore;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

pub const HEALTH_CHECK: &str = "health_check";
pub const CREATE_DOCUMENT: &str = "create_word_document";
pub const CREATE_DOCUMENT_ALIAS: &str = "create_document";
pub const READ_DOCUMENT: &str = "read_document_content";
pub const ADD_PARAGRAPH: &str = "add_paragraph";
pub const ADD_HEADING: &str = "add_heading";
pub const LIST_DOCUMENTS: &str = "list_available_word_documents";

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub static TOOL_DEFINITIONS: Lazy<Vec<ToolDefinition>> = Lazy::new(|| {
    vec![
        ToolDefinition {
            name: HEALTH_CHECK,
            description: "Check if the MCP Word Service is running.",
            input_schema: json!({ "type": "object", "properties": {} }),
        },
        ToolDefinition {
            name: CREATE_DOCUMENT,
            description: "Create a new Word (.docx) document. The extension is added \
                          automatically if missing. Returns the path to the created \
                          document or an error message.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "The name of the file to create"
                    },
                    "title": {
                        "type": "string",
                        "description": "An optional title added as the first heading"
                    }
                },
                "required": ["filename"]
            }),
        },
        ToolDefinition {
            name: READ_DOCUMENT,
            description: "Read and return the text content of a Word (.docx) document, \
                          including table rows.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "The name of the file to read"
                    }
                },
                "required": ["filename"]
            }),
        },
        ToolDefinition {
            name: ADD_PARAGRAPH,
            description: "Add a new paragraph to the end of an existing Word (.docx) document.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "The name of the file to modify"
                    },
                    "text": {
                        "type": "string",
                        "description": "The paragraph text to add"
                    }
                },
                "required": ["filename", "text"]
            }),
        },
        ToolDefinition {
            name: ADD_HEADING,
            description: "Add a heading to the end of an existing Word (.docx) document. \
                          Levels 1 to 3 are accepted.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filename": {
                        "type": "string",
                        "description": "The name of the file to modify"
                    },
                    "text": {
                        "type": "string",
                        "description": "The heading text to add"
                    },
                    "level": {
                        "type": "integer",
                        "description": "The heading level (1-3); omit for level 1",
                        "minimum": 1,
                        "maximum": 3,
                        "default": 1
                    }
                },
                "required": ["filename", "text"]
            }),
        },
        ToolDefinition {
            name: LIST_DOCUMENTS,
            description: "List all available Word (.docx) documents in the specified directory.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "directory": {
                        "type": "string",
                        "description": "The directory to search",
                        "default": "."
                    }
                }
            }),
        },
    ]
});

pub fn definitions() -> &'static [ToolDefinition] {
    &TOOL_DEFINITIONS
}

/// Outcome of a tool call, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub is_error: bool,
    pub content: Vec<String>,
}

impl ToolOutput {
    pub fn success(content: Vec<String>) -> Self {
        Self {
            is_error: false,
            content,
        }
    }

    pub fn error(err: &WordError) -> Self {
        Self {
            is_error: true,
            content: vec![err.to_wire()],
        }
    }

    /// All text items joined by newlines.
    pub fn text(&self) -> String {
        self.content.join("\n")
    }
}

#[derive(Debug, Deserialize)]
struct CreateParams {
    filename: String,
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReadParams {
    filename: String,
}

#[derive(Debug, Deserialize)]
struct ParagraphParams {
    filename: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct HeadingParams {
    filename: String,
    text: String,
    /// May be omitted, but an explicit `null` is rejected like any other
    /// non-integer.
    #[serde(default, deserialize_with = "explicit_level")]
    level: Option<i64>,
}

fn explicit_level<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    directory: Option<String>,
}

fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| WordError::InvalidParams(e.to_string()))
}

/// Runs the named tool. Never fails: every error becomes an error output.
pub fn call_tool<S: DocumentStore>(
    api: &mut WordApi<S>,
    name: &str,
    arguments: Value,
) -> ToolOutput {
    tracing::info!(tool = name, "tool call");
    match dispatch(api, name, arguments) {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(tool = name, kind = ?err.kind(), "tool failed: {}", err);
            ToolOutput::error(&err)
        }
    }
}

fn dispatch<S: DocumentStore>(
    api: &mut WordApi<S>,
    name: &str,
    arguments: Value,
) -> Result<ToolOutput> {
    match name {
        HEALTH_CHECK => Ok(render_messages(api.health_check())),
        CREATE_DOCUMENT | CREATE_DOCUMENT_ALIAS => {
            let p: CreateParams = parse(arguments)?;
            api.create_document(&p.filename, p.title.as_deref())
                .map(render_messages)
        }
        READ_DOCUMENT => {
            let p: ReadParams = parse(arguments)?;
            let result = api.read_document_content(&p.filename)?;
            Ok(ToolOutput::success(vec![result.content.unwrap_or_default()]))
        }
        ADD_PARAGRAPH => {
            let p: ParagraphParams = parse(arguments)?;
            api.add_paragraph(&p.filename, &p.text).map(render_messages)
        }
        ADD_HEADING => {
            let p: HeadingParams = parse(arguments)?;
            api.add_heading(&p.filename, &p.text, p.level)
                .map(render_messages)
        }
        LIST_DOCUMENTS => {
            let p: ListParams = parse(arguments)?;
            let result = api.list_documents(p.directory.as_deref())?;
            if result.listed_documents.is_empty() {
                Ok(render_messages(result))
            } else {
                Ok(ToolOutput::success(result.listed_documents))
            }
        }
        other => Err(WordError::UnknownTool(other.to_string())),
    }
}

fn render_messages(result: CmdResult) -> ToolOutput {
    ToolOutput::success(result.messages.into_iter().map(|m| m.content).collect())
}
