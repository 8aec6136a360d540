//! # Storage Layer
//!
//! The [`DocumentStore`] trait is everything the command layer knows about
//! where documents live. Commands validate and decide; stores only move blocks
//! in and out of files.
//!
//! ## Philosophy
//! - **Files are Truth**: a document exists if and only if its file exists.
//!   Nothing is cached between calls.
//! - **Whole-document saves**: appending opens the document, adds one block and
//!   serializes the entire document back to the same path.
//! - **No locking**: two writers racing on the same file is last-write-wins.
//!
//! ## Name Resolution
//!
//! Document names are file names relative to the store root (the configured
//! documents directory). Directory arguments may be relative to the root or
//! absolute.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store backed by `docx-rs`.
//! - [`memory::InMemoryStore`]: for testing command logic without touching disk.

use crate::error::Result;
use crate::model::Block;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Base directory names are resolved against.
    fn root(&self) -> &Path;

    /// Whether a document (or any file) with this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Write a brand-new document holding `blocks`, returning its absolute path.
    /// Callers are responsible for the existence check.
    fn create(&mut self, name: &str, blocks: &[Block]) -> Result<PathBuf>;

    /// All top-level blocks in document order.
    fn read_blocks(&self, name: &str) -> Result<Vec<Block>>;

    /// Append one block to the end of an existing document and save it.
    fn append(&mut self, name: &str, block: Block) -> Result<()>;

    /// Whether `directory` names an existing directory.
    fn is_directory(&self, directory: &str) -> bool;

    /// Names of all regular files directly inside `directory`, unfiltered.
    fn file_names(&self, directory: &str) -> Result<Vec<String>>;
}

/// Joins a name onto the store root unless it is already absolute.
pub fn resolve_in(root: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_against_root() {
        let root = Path::new("/docs");
        assert_eq!(resolve_in(root, "a.docx"), PathBuf::from("/docs/a.docx"));
        assert_eq!(resolve_in(root, "."), PathBuf::from("/docs/."));
    }

    #[test]
    fn test_resolve_keeps_absolute() {
        let root = Path::new("/docs");
        assert_eq!(resolve_in(root, "/tmp/x"), PathBuf::from("/tmp/x"));
    }
}
