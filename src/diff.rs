mod diff_error;
mod inline;
mod limits;
mod rows;

pub use diff_error::DiffError;
pub use limits::DiffLimits;

use crate::{align::lcs_diff, tokenizer::line_tokenizer, types::DiffResult};

/// Computes a side-by-side diff of `original` against `modified`.
///
/// Both texts are aligned line by line on their longest common subsequence.
/// A deleted line paired with an inserted line becomes a replacement row
/// whose sides carry character-level highlight runs; unpaired changes are
/// padded with `Empty` rows on the other side, so both columns of the
/// result always have the same height.
///
/// The function is total: any pair of strings is valid input, including
/// empty and identical ones. Cost is quadratic in the line counts (and, per
/// replacement row, in the line lengths); see [`compute_diff_bounded`] for
/// a guarded variant.
///
/// ```
/// use sidediff::{EditKind, compute_diff};
///
/// let result = compute_diff("hello world", "hello there");
///
/// assert_eq!(result.additions, 1);
/// assert_eq!(result.deletions, 1);
/// let parts = result.original_lines[0].parts.as_ref().unwrap();
/// assert_eq!(parts[0].kind, EditKind::Equal);
/// assert_eq!(parts[0].content, "hello ");
/// ```
#[must_use]
pub fn compute_diff(original: &str, modified: &str) -> DiffResult {
    let original_lines = line_tokenizer(original);
    let modified_lines = line_tokenizer(modified);

    let script = lcs_diff(&original_lines, &modified_lines);
    rows::assemble(&script)
}

/// Like [`compute_diff`], but rejects inputs exceeding `limits` instead of
/// spending quadratic time and memory on them.
///
/// The limits gate entry only: for accepted inputs the result is identical
/// to [`compute_diff`].
///
/// # Errors
///
/// [`DiffError::TooManyLines`] or [`DiffError::LineTooLong`] when either
/// input exceeds the corresponding limit.
pub fn compute_diff_bounded(
    original: &str,
    modified: &str,
    limits: &DiffLimits,
) -> Result<DiffResult, DiffError> {
    limits.check(original)?;
    limits.check(modified)?;

    Ok(compute_diff(original, modified))
}
