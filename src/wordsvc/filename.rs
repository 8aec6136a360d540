//! Filename normalization and validation.
//!
//! Every command resolves the user-supplied name the same way:
//! 1. [`normalize_filename`] appends `.docx` when the name lacks it
//! 2. [`validate_filename`] rejects reserved characters on the normalized name
//!
//! The reserved set also contains both path separators, so a valid name always
//! refers to a file directly inside the documents directory. This is not a full
//! sandbox: names such as `..docx` are still accepted.

use crate::error::{Result, WordError};

pub const DOCX_EXTENSION: &str = ".docx";

/// Characters that are invalid in common filesystem namespaces.
pub const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Appends the `.docx` extension unless the name already ends with it
/// (in any letter case).
///
/// # Examples
/// ```
/// use wordsvc::filename::normalize_filename;
///
/// assert_eq!(normalize_filename("report"), "report.docx");
/// assert_eq!(normalize_filename("report.DOCX"), "report.DOCX");
/// ```
pub fn normalize_filename(filename: &str) -> String {
    if has_docx_extension(filename) {
        filename.to_string()
    } else {
        format!("{}{}", filename, DOCX_EXTENSION)
    }
}

/// Case-insensitive check for the `.docx` suffix.
pub fn has_docx_extension(name: &str) -> bool {
    name.to_lowercase().ends_with(DOCX_EXTENSION)
}

pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.contains(RESERVED_CHARS) {
        return Err(WordError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}

/// Normalizes then validates, returning the effective filename.
pub fn resolve_filename(filename: &str) -> Result<String> {
    let normalized = normalize_filename(filename);
    validate_filename(&normalized)?;
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_extension_once() {
        assert_eq!(normalize_filename("notes"), "notes.docx");
        assert_eq!(normalize_filename("notes.txt"), "notes.txt.docx");
        assert_eq!(normalize_filename(""), ".docx");
    }

    #[test]
    fn test_existing_extension_any_case_is_noop() {
        for name in ["a.docx", "a.DOCX", "a.DocX", "a.dOcX"] {
            assert_eq!(normalize_filename(name), name);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_filename("plan");
        assert_eq!(normalize_filename(&once), once);
    }

    #[test]
    fn test_rejects_each_reserved_char() {
        for ch in RESERVED_CHARS {
            let name = format!("bad{}name.docx", ch);
            assert!(
                matches!(validate_filename(&name), Err(WordError::InvalidFilename(_))),
                "expected '{}' to be rejected",
                ch
            );
        }
    }

    #[test]
    fn test_accepts_plain_names() {
        assert!(validate_filename("quarterly report (v2).docx").is_ok());
        assert!(validate_filename("über-notes.docx").is_ok());
    }

    #[test]
    fn test_resolve_validates_normalized_name() {
        assert_eq!(resolve_filename("report").unwrap(), "report.docx");
        assert!(resolve_filename("../escape").is_err());
    }
}
