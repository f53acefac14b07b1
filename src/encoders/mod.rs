pub mod base64;
pub mod errors;
pub mod nibble;
pub mod tokenizer;

// Re-export error types for public API
pub use errors::{AlphabetError, CodecError, ErrorKind, set_color};
pub use tokenizer::{Tokens, tokenize};
