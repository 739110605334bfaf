mod lcs;
mod raw_edit;

pub use lcs::lcs_diff;
pub use raw_edit::RawEdit;
