//! Text analysis: tokenization and stop word handling.

pub mod stop;
pub mod tokenizer;

pub use stop::StopWordSet;
pub use tokenizer::{WhitespaceTokenizer, is_valid_word};
