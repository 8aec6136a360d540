//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all document operations, whichever front end is in use (the
//! MCP server, the `call` subcommand, tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Applies defaults** (heading level 1, listing directory `.`)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does not format wire text; see [`crate::tools`] for that.
//!
//! ## Generic Over DocumentStore
//!
//! `WordApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `WordApi<FileStore>`
//! - Testing: `WordApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::DocumentStore;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct WordApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> WordApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_document(&mut self, filename: &str, title: Option<&str>) -> Result<CmdResult> {
        commands::create::run(&mut self.store, filename, title)
    }

    pub fn read_document_content(&self, filename: &str) -> Result<CmdResult> {
        commands::read::run(&self.store, filename)
    }

    pub fn add_paragraph(&mut self, filename: &str, text: &str) -> Result<CmdResult> {
        commands::paragraph::run(&mut self.store, filename, text)
    }

    pub fn add_heading(
        &mut self,
        filename: &str,
        text: &str,
        level: Option<i64>,
    ) -> Result<CmdResult> {
        let level = level.unwrap_or(commands::heading::DEFAULT_LEVEL);
        commands::heading::run(&mut self.store, filename, text, level)
    }

    pub fn list_documents(&self, directory: Option<&str>) -> Result<CmdResult> {
        let directory = directory.unwrap_or(commands::list::DEFAULT_DIRECTORY);
        commands::list::run(&self.store, directory)
    }

    pub fn health_check(&self) -> CmdResult {
        commands::health::run()
    }

    pub fn documents_dir(&self) -> &Path {
        self.store.root()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
