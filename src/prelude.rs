//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in sigilwire.
//!
//! # Example
//!
//! ```
//! use sigilwire::prelude::*;
//!
//! let encoded = encode_base64("Hello").unwrap();
//! assert_eq!(detect_scheme(&encoded), Some(Scheme::Base64));
//! assert_eq!(decode_auto(&encoded, TextEncoding::Utf8).unwrap(), "Hello");
//! ```

// Core encoding/decoding
pub use crate::{
    CodecResult, decode_auto, decode_base64, decode_base64_with, decode_bytes, decode_nibble,
    decode_nibble_with, encode_base64, encode_base64_with, encode_bytes, encode_nibble,
    encode_nibble_with, transcode,
};

// Types
pub use crate::{Alphabet, CodecError, Direction, ErrorKind, Scheme, TextEncoding, Token};

// Detection
pub use crate::{detect_scheme, looks_like_base64_stream, looks_like_nibble_stream, tokenize};

// Config
pub use crate::Settings;
