//! Reversible text-to-emoji transcoding.
//!
//! Text is turned into bytes under a declared [`TextEncoding`], and the
//! bytes into a stream of emoji drawn from one of two fixed alphabets:
//!
//! - [`Scheme::Nibble`]: 16 symbols, one per hex digit (two per byte).
//! - [`Scheme::Base64`]: standard padded base-64 remapped onto 64 symbols,
//!   with a dedicated padding symbol.
//!
//! Decoding ignores whitespace between symbols and is strict everywhere
//! else. Every operation returns a [`CodecResult`]; nothing partial is
//! ever returned on failure.
//!
//! # Example
//!
//! ```
//! use sigilwire::{decode_nibble, encode_nibble};
//!
//! let encoded = encode_nibble("Hi").unwrap();
//! assert_eq!(encoded.chars().count(), 4);
//! assert_eq!(decode_nibble(&encoded).unwrap(), "Hi");
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;

pub use crate::core::alphabet::{
    Alphabet, BASE64_SYMBOLS, NIBBLE_SYMBOLS, PADDING_SYMBOL, Token,
};
pub use crate::core::config::{DEFAULT_MAX_SIZE, Settings};
pub use crate::core::scheme::{Direction, Scheme};
pub use crate::core::text::TextEncoding;
pub use crate::encoders::{AlphabetError, CodecError, ErrorKind, Tokens, set_color, tokenize};
pub use crate::features::{
    candidates, detect_scheme, looks_like, looks_like_base64_stream, looks_like_nibble_stream,
};

use crate::encoders::{base64, nibble};
use tracing::debug;

/// Outcome of every codec operation: the payload text, or the reason it
/// could not be produced.
pub type CodecResult = Result<String, CodecError>;

/// Encodes UTF-8 text as a nibble stream.
pub fn encode_nibble(text: &str) -> CodecResult {
    encode_nibble_with(text, TextEncoding::default())
}

/// Encodes text as a nibble stream using the given byte encoding.
pub fn encode_nibble_with(text: &str, encoding: TextEncoding) -> CodecResult {
    nibble::encode_text(text, encoding)
}

/// Decodes a nibble stream to UTF-8 text.
pub fn decode_nibble(text: &str) -> CodecResult {
    decode_nibble_with(text, TextEncoding::default())
}

/// Decodes a nibble stream to text in the given byte encoding.
pub fn decode_nibble_with(text: &str, encoding: TextEncoding) -> CodecResult {
    nibble::decode_text(text, encoding)
}

/// Encodes UTF-8 text as a base64 stream.
pub fn encode_base64(text: &str) -> CodecResult {
    encode_base64_with(text, TextEncoding::default())
}

/// Encodes text as a base64 stream using the given byte encoding.
pub fn encode_base64_with(text: &str, encoding: TextEncoding) -> CodecResult {
    base64::encode_text(text, encoding)
}

/// Decodes a base64 stream to UTF-8 text.
pub fn decode_base64(text: &str) -> CodecResult {
    decode_base64_with(text, TextEncoding::default())
}

/// Decodes a base64 stream to text in the given byte encoding.
pub fn decode_base64_with(text: &str, encoding: TextEncoding) -> CodecResult {
    base64::decode_text(text, encoding)
}

/// Runs one conversion: the single dispatch point for front-ends.
pub fn transcode(
    text: &str,
    scheme: Scheme,
    direction: Direction,
    encoding: TextEncoding,
) -> CodecResult {
    debug!(%scheme, %direction, %encoding, input_bytes = text.len(), "transcode");

    let result = match (scheme, direction) {
        (Scheme::Nibble, Direction::Encode) => encode_nibble_with(text, encoding),
        (Scheme::Nibble, Direction::Decode) => decode_nibble_with(text, encoding),
        (Scheme::Base64, Direction::Encode) => encode_base64_with(text, encoding),
        (Scheme::Base64, Direction::Decode) => decode_base64_with(text, encoding),
    };

    if let Err(e) = &result {
        debug!(kind = ?e.kind(), "transcode failed");
    }
    result
}

/// Detects the scheme of `text` and decodes it.
///
/// Nibble takes priority when both alphabets cover the input. Fails with
/// [`ErrorKind::Undetected`] when neither does.
pub fn decode_auto(text: &str, encoding: TextEncoding) -> CodecResult {
    let scheme = detect_scheme(text).ok_or(CodecError::Undetected)?;
    transcode(text, scheme, Direction::Decode, encoding)
}

/// Encodes raw bytes, skipping the text layer.
pub fn encode_bytes(data: &[u8], scheme: Scheme) -> String {
    match scheme {
        Scheme::Nibble => nibble::encode(data),
        Scheme::Base64 => base64::encode(data),
    }
}

/// Decodes a symbol stream to raw bytes, skipping the text layer.
pub fn decode_bytes(encoded: &str, scheme: Scheme) -> Result<Vec<u8>, CodecError> {
    match scheme {
        Scheme::Nibble => nibble::decode(encoded),
        Scheme::Base64 => base64::decode(encoded),
    }
}
