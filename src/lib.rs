//! Compute structured, human-reviewable differences between two text blobs,
//! laid out for two-column (side-by-side) rendering with character-level
//! highlighting inside modified lines.
//!
//! The entry point is [`compute_diff`]; [`compute_diff_bounded`] is the same
//! computation behind a caller-configurable size guard.

mod align;
mod diff;
mod tokenizer;
mod types;

pub use diff::{DiffError, DiffLimits, compute_diff, compute_diff_bounded};
pub use types::{DiffResult, DisplayLine, EditKind, Segment};

#[cfg(feature = "wasm")]
pub mod wasm;
