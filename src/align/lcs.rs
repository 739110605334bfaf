//! Longest-common-subsequence alignment by dynamic programming.
//!
//! * time: `O(N*M)`
//! * space: `O(N*M)`
//!
//! The full table keeps the backtracking simple and the edit script exactly
//! minimal. No divide-and-conquer or bit-parallel refinement is applied, so
//! the table is the dominant cost on large inputs.

use std::fmt::Debug;

use super::raw_edit::RawEdit;

/// Aligns `old` and `new` on their longest common subsequence and returns
/// the minimal edit script.
///
/// Tokens are compared by exact equality; the routine is oblivious to what
/// a token is, so the same code serves whole lines and single characters.
/// Every element of `old` appears in the script as exactly one `Equal` or
/// `Delete`, and every element of `new` as exactly one `Equal` or `Insert`,
/// in the order of the inputs.
pub fn lcs_diff<T>(old: &[T], new: &[T]) -> Vec<RawEdit<T>>
where
    T: PartialEq + Clone + Debug,
{
    let n = old.len();
    let m = new.len();

    // lengths[i][j] is the LCS length of old[..i] and new[..j].
    let mut lengths = vec![vec![0_usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            lengths[i][j] = if old[i - 1] == new[j - 1] {
                lengths[i - 1][j - 1] + 1
            } else {
                lengths[i - 1][j].max(lengths[i][j - 1])
            };
        }
    }

    // Backtrack from (n, m); the script comes out back to front and gets
    // reversed once at the end. On ties the insert branch wins, which makes
    // every changed block read as a run of deletes followed by a run of
    // inserts once the script is reversed.
    let mut result = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            result.push(RawEdit::Equal(old[i - 1].clone()));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lengths[i][j - 1] >= lengths[i - 1][j]) {
            result.push(RawEdit::Insert(new[j - 1].clone()));
            j -= 1;
        } else {
            result.push(RawEdit::Delete(old[i - 1].clone()));
            i -= 1;
        }
    }
    result.reverse();

    debug_assert!(
        result
            .iter()
            .filter(|edit| matches!(edit, RawEdit::Equal(_) | RawEdit::Delete(_)))
            .count()
            == n
            && result
                .iter()
                .filter(|edit| matches!(edit, RawEdit::Equal(_) | RawEdit::Insert(_)))
                .count()
                == m,
        "The edit script must cover every input token exactly once"
    );

    result
}
