#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::display_line::DisplayLine;

/// The complete outcome of diffing two texts, ready for two-column
/// rendering.
///
/// `original_lines` and `modified_lines` always have the same length: the
/// entries at any index together form one aligned row, with `Empty` pads
/// filling the side that has no content there. `additions` and `deletions`
/// count raw inserted and deleted lines, independent of how rows were
/// paired up for display.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    pub original_lines: Vec<DisplayLine>,
    pub modified_lines: Vec<DisplayLine>,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffResult {
    #[must_use]
    pub fn row_count(&self) -> usize { self.original_lines.len() }

    #[must_use]
    pub fn is_unchanged(&self) -> bool { self.additions == 0 && self.deletions == 0 }
}
