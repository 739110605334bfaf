mod character_tokenizer;
mod line_tokenizer;

pub use character_tokenizer::character_tokenizer;
pub use line_tokenizer::line_tokenizer;
