use crate::error::{Result, WordError};
use crate::filename::resolve_filename;
use crate::store::DocumentStore;

/// Resolves `filename` and requires the document to exist.
///
/// Returns the normalized name used for all further store calls.
pub fn existing_document<S: DocumentStore>(store: &S, filename: &str) -> Result<String> {
    let name = resolve_filename(filename)?;
    if !store.exists(&name) {
        return Err(WordError::NotFound(name));
    }
    Ok(name)
}

/// Resolves `filename` and requires that nothing exists at that path yet.
pub fn new_document<S: DocumentStore>(store: &S, filename: &str) -> Result<String> {
    let name = resolve_filename(filename)?;
    if store.exists(&name) {
        return Err(WordError::AlreadyExists(name));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_existing_document_normalizes() {
        let mut store = InMemoryStore::new();
        store.insert_file("memo.docx", vec![]);
        assert_eq!(existing_document(&store, "memo").unwrap(), "memo.docx");
    }

    #[test]
    fn test_existing_document_missing() {
        let store = InMemoryStore::new();
        match existing_document(&store, "memo") {
            Err(WordError::NotFound(name)) => assert_eq!(name, "memo.docx"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_characters_checked_before_existence() {
        let mut store = InMemoryStore::new();
        store.insert_file("a*b.docx", vec![]);
        assert!(matches!(
            existing_document(&store, "a*b"),
            Err(WordError::InvalidFilename(_))
        ));
        assert!(matches!(
            new_document(&store, "a*b"),
            Err(WordError::InvalidFilename(_))
        ));
    }

    #[test]
    fn test_new_document_conflict() {
        let mut store = InMemoryStore::new();
        store.insert_file("memo.docx", vec![]);
        assert!(matches!(
            new_document(&store, "memo.DOCX"),
            Ok(ref n) if n == "memo.DOCX"
        ));
        assert!(matches!(
            new_document(&store, "memo"),
            Err(WordError::AlreadyExists(_))
        ));
    }
}
