use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordError};
use crate::model::{Block, HeadingLevel};
use crate::store::DocumentStore;

use super::helpers::existing_document;

pub const DEFAULT_LEVEL: i64 = 1;

/// Appends a heading. Only levels 1 through 3 are accepted, even though the
/// document format itself supports deeper headings.
pub fn run<S: DocumentStore>(
    store: &mut S,
    filename: &str,
    text: &str,
    level: i64,
) -> Result<CmdResult> {
    let name = existing_document(store, filename)?;
    let level = HeadingLevel::try_from(level)?;

    store
        .append(&name, Block::heading(text, level))
        .map_err(|e| WordError::failed("adding heading", e))?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Heading (level {}) added to '{}'.",
        level, name
    ))))
}
