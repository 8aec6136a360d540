use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordError};
use crate::model::{Block, HeadingLevel};
use crate::store::DocumentStore;

use super::helpers::new_document;

/// Creates a new document. Never overwrites: an existing file is a conflict.
///
/// A non-empty `title` becomes a level-1 heading, the document's first element.
pub fn run<S: DocumentStore>(
    store: &mut S,
    filename: &str,
    title: Option<&str>,
) -> Result<CmdResult> {
    let name = new_document(store, filename)?;

    let blocks: Vec<Block> = title
        .filter(|t| !t.is_empty())
        .map(|t| Block::heading(t, HeadingLevel::TOP))
        .into_iter()
        .collect();

    let path = store
        .create(&name, &blocks)
        .map_err(|e| WordError::failed("creating document", e))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Document created: {}",
            path.display()
        )))
        .with_document_paths(vec![path]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_with_extension_appended() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "report", None).unwrap();

        assert!(store.exists("report.docx"));
        assert_eq!(result.document_paths.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "Document created: /mem/report.docx"
        );
        assert!(store.read_blocks("report.docx").unwrap().is_empty());
    }

    #[test]
    fn title_becomes_top_heading() {
        let mut store = InMemoryStore::new();
        run(&mut store, "report", Some("Quarterly")).unwrap();

        assert_eq!(
            store.read_blocks("report.docx").unwrap(),
            vec![Block::heading("Quarterly", HeadingLevel::TOP)]
        );
    }

    #[test]
    fn empty_title_adds_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, "report", Some("")).unwrap();
        assert!(store.read_blocks("report.docx").unwrap().is_empty());
    }

    #[test]
    fn second_create_conflicts_and_keeps_first() {
        let mut store = InMemoryStore::new();
        run(&mut store, "report", Some("First")).unwrap();

        let err = run(&mut store, "report", Some("Second")).unwrap_err();
        assert_eq!(err.to_wire(), "Error: File 'report.docx' already exists.");
        assert_eq!(
            store.read_blocks("report.docx").unwrap(),
            vec![Block::heading("First", HeadingLevel::TOP)]
        );
    }

    #[test]
    fn invalid_name_creates_nothing() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "bad|name", None).unwrap_err();
        assert!(matches!(err, WordError::InvalidFilename(_)));
        assert!(store.file_names(".").unwrap().is_empty());
    }
}
