#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{edit_kind::EditKind, segment::Segment};

/// One side of an aligned display row.
///
/// `content` always holds the full line text (empty for `Empty` pads). Line
/// numbers are 1-based and each side only carries the number belonging to
/// its own document. `parts` is present only on rows that take part in a
/// replacement, where it holds the merged character runs used for inline
/// highlighting.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub kind: EditKind,
    pub content: String,
    pub original_line_number: Option<usize>,
    pub modified_line_number: Option<usize>,
    pub parts: Option<Vec<Segment>>,
}

impl DisplayLine {
    #[must_use]
    pub fn new(kind: EditKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            original_line_number: None,
            modified_line_number: None,
            parts: None,
        }
    }

    /// A blank placeholder for the side of a row that has no line.
    #[must_use]
    pub fn empty() -> Self { Self::new(EditKind::Empty, "") }

    #[must_use]
    pub fn with_original_line_number(mut self, line_number: usize) -> Self {
        self.original_line_number = Some(line_number);
        self
    }

    #[must_use]
    pub fn with_modified_line_number(mut self, line_number: usize) -> Self {
        self.modified_line_number = Some(line_number);
        self
    }

    #[must_use]
    pub fn with_parts(mut self, parts: Vec<Segment>) -> Self {
        self.parts = Some(parts);
        self
    }
}
