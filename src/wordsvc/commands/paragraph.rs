use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordError};
use crate::model::Block;
use crate::store::DocumentStore;

use super::helpers::existing_document;

pub fn run<S: DocumentStore>(store: &mut S, filename: &str, text: &str) -> Result<CmdResult> {
    let name = existing_document(store, filename)?;
    store
        .append(&name, Block::paragraph(text))
        .map_err(|e| WordError::failed("adding paragraph", e))?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Paragraph added to '{}'.",
        name
    ))))
}
