use crate::{
    align::{RawEdit, lcs_diff},
    tokenizer::character_tokenizer,
    types::{EditKind, Segment},
};

/// Character-level sub-alignment of a replacement pair.
///
/// Returns the original side's parts (everything but inserts) and the
/// modified side's parts (everything but deletes), each with adjacent
/// same-kind runs merged. Concatenating a side's part contents reconstructs
/// that side's line exactly.
pub(super) fn split_parts(old_line: &str, new_line: &str) -> (Vec<Segment>, Vec<Segment>) {
    let script = lcs_diff(&character_tokenizer(old_line), &character_tokenizer(new_line));

    let original_parts = merge_runs(
        script
            .iter()
            .filter(|edit| edit.kind() != EditKind::Insert),
    );
    let modified_parts = merge_runs(
        script
            .iter()
            .filter(|edit| edit.kind() != EditKind::Delete),
    );

    (original_parts, modified_parts)
}

/// Run-length merge: consecutive edits of the same kind collapse into one
/// segment so highlighting isn't fragmented character by character.
fn merge_runs<'a>(edits: impl Iterator<Item = &'a RawEdit<char>>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for edit in edits {
        match segments.last_mut() {
            Some(last) if last.kind == edit.kind() => last.content.push(*edit.token()),
            _ => segments.push(Segment::new(edit.kind(), edit.token().to_string())),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn contents(parts: &[Segment]) -> String {
        parts.iter().map(|part| part.content.as_str()).collect()
    }

    #[test]
    fn test_common_prefix_is_one_equal_run() {
        let (original_parts, modified_parts) = split_parts("hello world", "hello there");

        assert_eq!(original_parts[0], Segment::new(EditKind::Equal, "hello "));
        assert_eq!(modified_parts[0], Segment::new(EditKind::Equal, "hello "));
        assert!(
            original_parts[1..]
                .iter()
                .all(|part| part.kind != EditKind::Insert)
        );
        assert!(
            modified_parts[1..]
                .iter()
                .all(|part| part.kind != EditKind::Delete)
        );
    }

    #[test]
    fn test_parts_reconstruct_their_lines() {
        for (old_line, new_line) in [
            ("hello world", "hello there"),
            ("", "x"),
            ("x", ""),
            ("", ""),
            ("same", "same"),
            ("αβγ", "αδγ"),
        ] {
            let (original_parts, modified_parts) = split_parts(old_line, new_line);
            assert_eq!(contents(&original_parts), old_line);
            assert_eq!(contents(&modified_parts), new_line);
        }
    }

    #[test]
    fn test_no_adjacent_parts_share_a_kind() {
        let (original_parts, modified_parts) = split_parts("abcabc", "xbcybz");
        for parts in [&original_parts, &modified_parts] {
            for window in parts.windows(2) {
                assert_ne!(window[0].kind, window[1].kind);
            }
        }
    }

    #[test]
    fn test_fully_distinct_lines() {
        let (original_parts, modified_parts) = split_parts("aaa", "bbb");
        assert_eq!(original_parts, vec![Segment::new(EditKind::Delete, "aaa")]);
        assert_eq!(modified_parts, vec![Segment::new(EditKind::Insert, "bbb")]);
    }

    #[test]
    fn test_empty_sides_yield_empty_part_lists() {
        let (original_parts, modified_parts) = split_parts("", "x");
        assert_eq!(original_parts, vec![]);
        assert_eq!(modified_parts, vec![Segment::new(EditKind::Insert, "x")]);
    }
}
