//! Optional features module.
//!
//! Content sniffing for the auto-detect decode path, kept apart from the
//! core encoding/decoding functionality.

pub mod detection;

pub use detection::{
    candidates, detect_scheme, looks_like, looks_like_base64_stream, looks_like_nibble_stream,
};
