use super::diff_error::DiffError;
use crate::tokenizer::line_tokenizer;

/// Size guard for [`compute_diff_bounded`].
///
/// The alignment tables grow with the product of the two line counts and,
/// for each replacement row, the product of the two line lengths. Callers
/// on an interactive path can use these limits to reject oversized inputs
/// up front. Limits only gate entry; they never alter the computed result.
///
/// [`compute_diff_bounded`]: super::compute_diff_bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLimits {
    pub max_lines: usize,
    pub max_line_chars: usize,
}

impl Default for DiffLimits {
    fn default() -> Self {
        Self {
            max_lines: 20_000,
            max_line_chars: 5_000,
        }
    }
}

impl DiffLimits {
    pub(super) fn check(&self, text: &str) -> Result<(), DiffError> {
        let lines = line_tokenizer(text);
        if lines.len() > self.max_lines {
            return Err(DiffError::TooManyLines {
                lines: lines.len(),
                limit: self.max_lines,
            });
        }

        for (index, line) in lines.iter().enumerate() {
            let chars = line.chars().count();
            if chars > self.max_line_chars {
                return Err(DiffError::LineTooLong {
                    line_number: index + 1,
                    chars,
                    limit: self.max_line_chars,
                });
            }
        }

        Ok(())
    }
}
