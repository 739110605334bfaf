/// Splits text into its `char`s for character-level alignment.
///
/// Comparison happens per Unicode scalar value; grapheme clusters are not
/// kept together. A combining mark or a multi-scalar emoji can therefore be
/// split across equal and changed runs. This is a deliberate choice, not an
/// oversight: the highlighting consumer operates on the same boundaries.
///
/// ```not_rust
/// "Hey!" -> ['H', 'e', 'y', '!']
/// ```
pub fn character_tokenizer(text: &str) -> Vec<char> { text.chars().collect() }
