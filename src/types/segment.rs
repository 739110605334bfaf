#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::edit_kind::EditKind;

/// One run of characters inside a replacement line, tagged with how the run
/// changed. Adjacent runs of the same kind are merged before a segment list
/// is handed out, so highlighting stays contiguous.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: EditKind,
    pub content: String,
}

impl Segment {
    #[must_use]
    pub fn new(kind: EditKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}
