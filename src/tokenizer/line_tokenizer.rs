/// Splits text into lines on `\n`, stripping a single `\r` that precedes the
/// newline so Windows line endings compare equal to Unix ones. A `\r` that
/// is not followed by a `\n` is line content and stays in place, including
/// at the very end of the input.
///
/// Standard split semantics apply, with one exception: the empty string
/// yields no lines at all instead of a single empty line. Diffing against
/// empty text therefore produces pure insert or delete rows rather than a
/// replacement of a phantom empty line. A trailing newline still produces a
/// trailing empty line.
///
/// ## Example
///
/// ```not_rust
/// "Hello\nWorld!" -> ["Hello", "World!"]
/// "Line 1\r\nLine 2" -> ["Line 1", "Line 2"]
/// "Hello\n" -> ["Hello", ""]
/// "Hello\r" -> ["Hello\r"]
/// "" -> []
/// ```
pub fn line_tokenizer(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<&str> = text.split('\n').collect();

    // Every piece except the last was terminated by a newline; only there
    // can a preceding \r be part of the line ending.
    let terminated = lines.len() - 1;
    for line in &mut lines[..terminated] {
        *line = line.strip_suffix('\r').unwrap_or(line);
    }

    lines
}
