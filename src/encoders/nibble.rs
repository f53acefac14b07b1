use crate::core::alphabet::{Alphabet, Token};
use crate::core::scheme::Scheme;
use crate::core::text::TextEncoding;
use crate::encoders::errors::CodecError;
use crate::encoders::tokenizer::tokenize;

/// Encodes bytes as two symbols each, high nibble first.
pub fn encode(data: &[u8]) -> String {
    let symbols = Alphabet::for_scheme(Scheme::Nibble).symbols();

    // Every nibble symbol is a single 4-byte emoji
    let mut result = String::with_capacity(data.len() * 8);
    for &byte in data {
        result.push_str(symbols[(byte >> 4) as usize]);
        result.push_str(symbols[(byte & 0x0F) as usize]);
    }
    result
}

/// Decodes a nibble stream back to bytes.
///
/// Whitespace anywhere in the stream is ignored. Fails on the first
/// unrecognized symbol, or if the symbol count is odd.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let alphabet = Alphabet::for_scheme(Scheme::Nibble);

    let mut nibbles = Vec::with_capacity(encoded.len() / 4);
    for token in tokenize(encoded, alphabet) {
        match token? {
            Token::Value(value) => nibbles.push(value),
            Token::Padding => unreachable!("nibble alphabet has no padding symbol"),
        }
    }

    if nibbles.len() % 2 != 0 {
        return Err(CodecError::malformed_length(nibbles.len()));
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Encodes `text` in `encoding`, then maps the bytes to symbols.
pub fn encode_text(text: &str, encoding: TextEncoding) -> Result<String, CodecError> {
    let bytes = encoding.encode(text)?;
    Ok(encode(&bytes))
}

/// Decodes a symbol stream to bytes, then strictly to text in `encoding`.
pub fn decode_text(encoded: &str, encoding: TextEncoding) -> Result<String, CodecError> {
    let bytes = decode(encoded)?;
    encoding.decode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::errors::ErrorKind;

    #[test]
    fn test_encode_hi() {
        // 0x48 0x69
        assert_eq!(encode(b"Hi"), "😄😊😆🙂");
    }

    #[test]
    fn test_decode_hi() {
        assert_eq!(decode("😄😊😆🙂").unwrap(), vec![0x48, 0x69]);
        assert_eq!(decode_text("😄😊😆🙂", TextEncoding::Utf8).unwrap(), "Hi");
    }

    #[test]
    fn test_extreme_bytes() {
        assert_eq!(encode(&[0x00, 0xff]), "😀😀😗😗");
        assert_eq!(decode("😀😀😗😗").unwrap(), vec![0x00, 0xff]);
    }

    #[test]
    fn test_length_invariant() {
        let text = "naïve café ☕";
        let encoded = encode_text(text, TextEncoding::Utf8).unwrap();
        assert_eq!(encoded.chars().count(), 2 * text.len());
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode("  \n").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_odd_count_is_malformed() {
        let err = decode("😄😊😆").unwrap_err();
        assert_eq!(err, CodecError::malformed_length(3));
    }

    #[test]
    fn test_padding_symbol_is_unrecognized() {
        let err = decode("😀🟦").unwrap_err();
        assert_eq!(err, CodecError::unrecognized_symbol('🟦', 1, Scheme::Nibble));
    }

    #[test]
    fn test_unknown_symbol_beats_length_check() {
        let err = decode("😄😊😆x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedSymbol);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        // 0xff is never valid UTF-8
        let err = decode_text("😗😗", TextEncoding::Utf8).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TextEncoding);
    }

    #[test]
    fn test_utf16_roundtrip() {
        let encoded = encode_text("Hi", TextEncoding::Utf16Le).unwrap();
        assert_eq!(encoded.chars().count(), 8);
        assert_eq!(decode_text(&encoded, TextEncoding::Utf16Le).unwrap(), "Hi");
    }
}
