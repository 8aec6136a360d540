use crate::commands::CmdResult;
use crate::error::{Result, WordError};
use crate::model::Block;
use crate::store::DocumentStore;

use super::helpers::existing_document;

/// Extracts a document's text.
///
/// All paragraphs come first in document order, followed by every table row
/// (cells joined by tabs). Whitespace-only lines are dropped. A document with
/// no text yields an empty string.
pub fn run<S: DocumentStore>(store: &S, filename: &str) -> Result<CmdResult> {
    let name = existing_document(store, filename)?;
    let blocks = store
        .read_blocks(&name)
        .map_err(|e| WordError::failed("reading document", e))?;

    Ok(CmdResult::default().with_content(extract_text(&blocks)))
}

pub fn extract_text(blocks: &[Block]) -> String {
    let paragraphs = blocks.iter().filter_map(|block| match block {
        Block::Paragraph { text, .. } => Some(text.clone()),
        Block::Table { .. } => None,
    });
    let table_rows = blocks.iter().flat_map(|block| match block {
        Block::Table { rows } => rows
            .iter()
            .map(|cells| cells.join("\t"))
            .collect::<Vec<String>>(),
        Block::Paragraph { .. } => Vec::new(),
    });

    paragraphs
        .chain(table_rows)
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
