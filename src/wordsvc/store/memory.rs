use super::{resolve_in, DocumentStore};
use crate::error::{Result, WordError};
use crate::model::Block;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Keeps documents as block lists keyed by their resolved path.
///
/// Non-document files can be registered too (with no blocks) so directory
/// listings can be exercised.
pub struct InMemoryStore {
    root: PathBuf,
    files: BTreeMap<PathBuf, Vec<Block>>,
    directories: BTreeSet<PathBuf>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mem"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let mut directories = BTreeSet::new();
        directories.insert(root.clone());
        Self {
            root,
            files: BTreeMap::new(),
            directories,
        }
    }

    /// Register a file (document or not) without going through `create`.
    pub fn insert_file(&mut self, name: &str, blocks: Vec<Block>) {
        let path = resolve_in(&self.root, name);
        if let Some(parent) = path.parent() {
            self.directories.insert(parent.to_path_buf());
        }
        self.files.insert(path, blocks);
    }

    pub fn add_directory(&mut self, directory: &str) {
        let path = resolve_in(&self.root, directory);
        self.directories.insert(path);
    }

    fn dir_path(&self, directory: &str) -> PathBuf {
        let path = resolve_in(&self.root, directory);
        // Treat "x/." as "x"
        path.components().collect()
    }
}

impl DocumentStore for InMemoryStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(&resolve_in(&self.root, name))
    }

    fn create(&mut self, name: &str, blocks: &[Block]) -> Result<PathBuf> {
        let path = resolve_in(&self.root, name);
        self.files.insert(path.clone(), blocks.to_vec());
        Ok(path)
    }

    fn read_blocks(&self, name: &str) -> Result<Vec<Block>> {
        self.files
            .get(&resolve_in(&self.root, name))
            .cloned()
            .ok_or_else(|| WordError::NotFound(name.to_string()))
    }

    fn append(&mut self, name: &str, block: Block) -> Result<()> {
        let blocks = self
            .files
            .get_mut(&resolve_in(&self.root, name))
            .ok_or_else(|| WordError::NotFound(name.to_string()))?;
        blocks.push(block);
        Ok(())
    }

    fn is_directory(&self, directory: &str) -> bool {
        self.directories.contains(&self.dir_path(directory))
    }

    fn file_names(&self, directory: &str) -> Result<Vec<String>> {
        let dir = self.dir_path(directory);
        Ok(self
            .files
            .keys()
            .filter(|path| path.parent() == Some(dir.as_path()))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_append() {
        let mut store = InMemoryStore::new();
        store.create("a.docx", &[]).unwrap();
        store.append("a.docx", Block::paragraph("x")).unwrap();
        assert_eq!(
            store.read_blocks("a.docx").unwrap(),
            vec![Block::paragraph("x")]
        );
    }

    #[test]
    fn test_append_to_missing_fails() {
        let mut store = InMemoryStore::new();
        assert!(store.append("nope.docx", Block::paragraph("x")).is_err());
    }

    #[test]
    fn test_root_dot_is_directory() {
        let store = InMemoryStore::new();
        assert!(store.is_directory("."));
        assert!(store.is_directory("/mem"));
        assert!(!store.is_directory("missing"));
    }

    #[test]
    fn test_file_names_are_per_directory() {
        let mut store = InMemoryStore::new();
        store.insert_file("a.docx", vec![]);
        store.insert_file("sub/b.docx", vec![]);

        assert_eq!(store.file_names(".").unwrap(), vec!["a.docx"]);
        assert_eq!(store.file_names("sub").unwrap(), vec!["b.docx"]);
    }
}
