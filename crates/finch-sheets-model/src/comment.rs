//! Cell comments (notes)
//!
//! A [`CellComment`] is an annotation anchored to a cell: author, note
//! text, and whether the note box is shown without hovering.

use crate::CellReference;

/// A comment attached to a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellComment {
    /// Cell the comment is anchored to
    pub cell: CellReference,
    /// Author of the comment (may be empty)
    pub author: String,
    /// Note text
    pub note: String,
    /// Whether the note box is visible without hovering
    pub visible: bool,
}

impl CellComment {
    /// Create a comment with the given author and note text
    pub fn new(cell: CellReference, author: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            cell,
            author: author.into(),
            note: note.into(),
            visible: false,
        }
    }

    /// Create a comment with note text only (no author)
    pub fn note_only(cell: CellReference, note: impl Into<String>) -> Self {
        Self::new(cell, "", note)
    }

    /// Set whether the note box is visible by default
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Whether this comment carries an author
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}

impl std::fmt::Display for CellComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_author() {
            write!(f, "[{}]: {}", self.author, self.note)
        } else {
            write!(f, "{}", self.note)
        }
    }
}
