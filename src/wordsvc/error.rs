use thiserror::Error;

/// Broad failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
    Io,
    Protocol,
}

#[derive(Error, Debug)]
pub enum WordError {
    #[error("Filename contains invalid characters.")]
    InvalidFilename(String),

    #[error("Heading level must be an integer between 1 and 3.")]
    InvalidHeadingLevel(i64),

    #[error("'{0}' is not a valid directory.")]
    InvalidDirectory(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("File '{0}' already exists.")]
    AlreadyExists(String),

    #[error("File '{0}' does not exist.")]
    NotFound(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document: {0}")]
    Read(String),

    #[error("Failed to package document: {0}")]
    Write(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An underlying failure, tagged with the command phrase it happened in
    /// (e.g. "creating document").
    #[error("Error {action}: {source}")]
    Failed {
        action: &'static str,
        source: Box<WordError>,
    },
}

impl WordError {
    pub fn failed(action: &'static str, source: WordError) -> Self {
        WordError::Failed {
            action,
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WordError::InvalidFilename(_)
            | WordError::InvalidHeadingLevel(_)
            | WordError::InvalidDirectory(_)
            | WordError::InvalidParams(_) => ErrorKind::Validation,
            WordError::AlreadyExists(_) => ErrorKind::Conflict,
            WordError::NotFound(_) | WordError::UnknownTool(_) => ErrorKind::NotFound,
            WordError::Io(_)
            | WordError::Read(_)
            | WordError::Write(_)
            | WordError::Failed { .. } => ErrorKind::Io,
            WordError::Serialization(_) => ErrorKind::Protocol,
        }
    }

    /// Text form used on the wire. Always starts with "Error".
    pub fn to_wire(&self) -> String {
        match self {
            WordError::Failed { .. } => self.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, WordError>;
