use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, WordError};
use crate::filename::has_docx_extension;
use crate::store::DocumentStore;

pub const DEFAULT_DIRECTORY: &str = ".";

/// Placeholder reported when a directory holds no documents.
pub const NO_DOCUMENTS: &str = "No .docx files found.";

/// Lists `.docx` files directly inside `directory`, sorted by name.
///
/// Hidden files are skipped. An empty listing is not an error; an info message
/// carrying [`NO_DOCUMENTS`] is attached instead.
pub fn run<S: DocumentStore>(store: &S, directory: &str) -> Result<CmdResult> {
    if !store.is_directory(directory) {
        return Err(WordError::InvalidDirectory(directory.to_string()));
    }

    let mut names: Vec<String> = store
        .file_names(directory)
        .map_err(|e| WordError::failed("listing documents", e))?
        .into_iter()
        .filter(|name| !name.starts_with('.') && has_docx_extension(name))
        .collect();
    names.sort();

    let mut result = CmdResult::default();
    if names.is_empty() {
        result.add_message(CmdMessage::info(NO_DOCUMENTS));
    }
    Ok(result.with_listed_documents(names))
}
