mod diff_result;
mod display_line;
mod edit_kind;
mod segment;

pub use diff_result::DiffResult;
pub use display_line::DisplayLine;
pub use edit_kind::EditKind;
pub use segment::Segment;
