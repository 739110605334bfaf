use std::fmt::Debug;

use crate::types::EditKind;

/// One step of the raw edit script produced by [`lcs_diff`], wrapping a
/// single token.
///
/// [`lcs_diff`]: super::lcs_diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEdit<T>
where
    T: PartialEq + Clone + Debug,
{
    Equal(T),
    Insert(T),
    Delete(T),
}

impl<T> RawEdit<T>
where
    T: PartialEq + Clone + Debug,
{
    #[must_use]
    pub fn kind(&self) -> EditKind {
        match self {
            RawEdit::Equal(_) => EditKind::Equal,
            RawEdit::Insert(_) => EditKind::Insert,
            RawEdit::Delete(_) => EditKind::Delete,
        }
    }

    #[must_use]
    pub fn token(&self) -> &T {
        match self {
            RawEdit::Equal(token) | RawEdit::Insert(token) | RawEdit::Delete(token) => token,
        }
    }
}
