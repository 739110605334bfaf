#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a display row, or of one character run within a row.
///
/// `Empty` exists purely as a display pad: it marks the side of a row that
/// has no corresponding line, keeping the two columns the same height. The
/// aligner itself only ever produces `Equal`, `Insert`, and `Delete`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
    Empty,
}
