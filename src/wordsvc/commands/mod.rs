//! # Command Layer
//!
//! This module contains the **core logic** of wordsvc. Each command lives in its
//! own submodule and is a plain function over a [`DocumentStore`](crate::store::DocumentStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Normalize and validate the target filename
//! - Check preconditions (existence, heading level range, directory validity)
//! - Delegate the document read/mutation to the store
//! - Return a structured [`CmdResult`] or a [`WordError`](crate::error::WordError)
//!
//! ## What Commands Do NOT Do
//!
//! - **Wire formatting**: turning results into protocol text is the tool layer's job
//! - **Argument decoding**: commands take typed Rust values, not JSON
//! - **Process control**: no command may exit or panic on bad input
//!
//! ## Precondition Order
//!
//! Every command that takes a filename performs, in order:
//! 1. Extension normalization
//! 2. Reserved-character validation
//! 3. Existence check (`create` requires absence, everything else presence)
//!
//! Any remaining argument checks (heading level) come after these.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`crate::store::memory::InMemoryStore`] and cover
//! every branch; the docx round trip is tested separately in the store layer.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a new document, optionally with a title heading
//! - [`read`]: Extract document text
//! - [`paragraph`]: Append a paragraph
//! - [`heading`]: Append a heading
//! - [`list`]: List documents in a directory
//! - [`health`]: Fixed availability message
//! - [`helpers`]: Shared filename/existence checks

use std::path::PathBuf;

pub mod create;
pub mod health;
pub mod heading;
pub mod helpers;
pub mod list;
pub mod paragraph;
pub mod read;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Files written by the command (absolute where known)
    pub document_paths: Vec<PathBuf>,
    /// Base file names, for `list`
    pub listed_documents: Vec<String>,
    /// Extracted text, for `read`
    pub content: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_document_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.document_paths = paths;
        self
    }

    pub fn with_listed_documents(mut self, names: Vec<String>) -> Self {
        self.listed_documents = names;
        self
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }
}
