//! Core data types shared by the command and storage layers.
//!
//! Documents are never cached between calls. A [`Block`] is the unit the
//! stores hand back when reading and accept when appending; the `.docx`
//! object model itself stays inside [`crate::store::fs`].

use crate::error::WordError;
use std::fmt;

/// Heading depth accepted by `add_heading`.
///
/// The document format allows up to nine levels; the command surface only
/// accepts 1 through 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub const TOP: HeadingLevel = HeadingLevel(1);

    pub fn get(self) -> u8 {
        self.0
    }

    /// Style id used for this level in the document's style table.
    pub fn style_id(self) -> String {
        format!("Heading{}", self.0)
    }

    /// Human-readable style name.
    pub fn style_name(self) -> String {
        format!("heading {}", self.0)
    }

    /// Parses a style id like `Heading2` back into a level.
    ///
    /// Deeper headings (`Heading4`..`Heading9`) have no `HeadingLevel` and
    /// yield `None`; their text is still read as a plain paragraph.
    pub fn from_style_id(style_id: &str) -> Option<HeadingLevel> {
        let digits = style_id
            .strip_prefix("Heading")
            .or_else(|| style_id.strip_prefix("heading"))?;
        let level: i64 = digits.trim().parse().ok()?;
        HeadingLevel::try_from(level).ok()
    }
}

impl TryFrom<i64> for HeadingLevel {
    type Error = WordError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&level) {
            Ok(HeadingLevel(level as u8))
        } else {
            Err(WordError::InvalidHeadingLevel(level))
        }
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::TOP
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph {
        text: String,
        heading: Option<HeadingLevel>,
    },
    /// Each row is a list of cell texts.
    Table { rows: Vec<Vec<String>> },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            heading: None,
        }
    }

    pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Self {
        Block::Paragraph {
            text: text.into(),
            heading: Some(level),
        }
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Block::Table { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_range() {
        assert!(HeadingLevel::try_from(0).is_err());
        assert_eq!(HeadingLevel::try_from(1).unwrap().get(), 1);
        assert_eq!(HeadingLevel::try_from(2).unwrap().get(), 2);
        assert_eq!(HeadingLevel::try_from(3).unwrap().get(), 3);
        assert!(HeadingLevel::try_from(4).is_err());
        assert!(HeadingLevel::try_from(-1).is_err());
        assert!(HeadingLevel::try_from(i64::MAX).is_err());
    }

    #[test]
    fn test_style_id_round_trip() {
        let level = HeadingLevel::try_from(2).unwrap();
        assert_eq!(level.style_id(), "Heading2");
        assert_eq!(HeadingLevel::from_style_id("Heading2"), Some(level));
    }

    #[test]
    fn test_from_style_id_ignores_other_styles() {
        assert_eq!(HeadingLevel::from_style_id("Normal"), None);
        assert_eq!(HeadingLevel::from_style_id("Heading"), None);
        assert_eq!(HeadingLevel::from_style_id("Heading0"), None);
        assert_eq!(
            HeadingLevel::from_style_id("heading 3").map(HeadingLevel::get),
            Some(3)
        );
    }

    #[test]
    fn test_from_style_id_rejects_deeper_levels() {
        assert_eq!(HeadingLevel::from_style_id("Heading4"), None);
        assert_eq!(HeadingLevel::from_style_id("Heading9"), None);
    }
}
