use super::inline;
use crate::{
    align::RawEdit,
    types::{DiffResult, DisplayLine, EditKind},
};

/// Walks the raw line-level edit script and assembles the aligned,
/// `Empty`-padded display rows.
///
/// Changed blocks arrive from the aligner as a run of deletes followed by a
/// run of inserts. The runs are paired greedily one-to-one in order into
/// replacement rows until one side is exhausted; the rest become lone rows
/// padded on the other side. This is a display heuristic, not an optimal
/// block alignment, and it can pair semantically unrelated lines when the
/// run lengths differ.
pub(super) fn assemble(script: &[RawEdit<&str>]) -> DiffResult {
    let mut original_lines = Vec::new();
    let mut modified_lines = Vec::new();
    let mut additions = 0;
    let mut deletions = 0;
    let mut original_line_number = 1;
    let mut modified_line_number = 1;

    let mut index = 0;
    while index < script.len() {
        match &script[index] {
            RawEdit::Equal(line) => {
                original_lines.push(
                    DisplayLine::new(EditKind::Equal, *line)
                        .with_original_line_number(original_line_number),
                );
                modified_lines.push(
                    DisplayLine::new(EditKind::Equal, *line)
                        .with_modified_line_number(modified_line_number),
                );
                original_line_number += 1;
                modified_line_number += 1;
                index += 1;
            }
            RawEdit::Delete(_) => {
                let deletes_start = index;
                while index < script.len() && matches!(script[index], RawEdit::Delete(_)) {
                    index += 1;
                }
                let inserts_start = index;
                while index < script.len() && matches!(script[index], RawEdit::Insert(_)) {
                    index += 1;
                }

                let deleted = &script[deletes_start..inserts_start];
                let inserted = &script[inserts_start..index];
                deletions += deleted.len();
                additions += inserted.len();

                let paired = deleted.len().min(inserted.len());
                for (deleted_edit, inserted_edit) in deleted.iter().zip(inserted) {
                    let old_line = *deleted_edit.token();
                    let new_line = *inserted_edit.token();
                    let (original_parts, modified_parts) = inline::split_parts(old_line, new_line);

                    original_lines.push(
                        DisplayLine::new(EditKind::Delete, old_line)
                            .with_original_line_number(original_line_number)
                            .with_parts(original_parts),
                    );
                    modified_lines.push(
                        DisplayLine::new(EditKind::Insert, new_line)
                            .with_modified_line_number(modified_line_number)
                            .with_parts(modified_parts),
                    );
                    original_line_number += 1;
                    modified_line_number += 1;
                }

                for edit in &deleted[paired..] {
                    original_lines.push(
                        DisplayLine::new(EditKind::Delete, *edit.token())
                            .with_original_line_number(original_line_number),
                    );
                    modified_lines.push(DisplayLine::empty());
                    original_line_number += 1;
                }
                for edit in &inserted[paired..] {
                    original_lines.push(DisplayLine::empty());
                    modified_lines.push(
                        DisplayLine::new(EditKind::Insert, *edit.token())
                            .with_modified_line_number(modified_line_number),
                    );
                    modified_line_number += 1;
                }
            }
            RawEdit::Insert(line) => {
                additions += 1;
                original_lines.push(DisplayLine::empty());
                modified_lines.push(
                    DisplayLine::new(EditKind::Insert, *line)
                        .with_modified_line_number(modified_line_number),
                );
                modified_line_number += 1;
                index += 1;
            }
        }
    }

    debug_assert!(
        original_lines.len() == modified_lines.len(),
        "Both columns must hold the same number of rows"
    );

    DiffResult {
        original_lines,
        modified_lines,
        additions,
        deletions,
    }
}
