use crate::core::alphabet::Alphabet;
use crate::core::scheme::Scheme;
use crate::core::text::TextEncoding;
use crate::encoders::errors::CodecError;
use crate::encoders::tokenizer::tokenize;
use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;

/// Encodes bytes as standard padded base-64, remapped onto emoji.
pub fn encode(data: &[u8]) -> String {
    let alphabet = Alphabet::for_scheme(Scheme::Base64);
    let standard = STANDARD.encode(data);

    let mut result = String::with_capacity(standard.len() * 4);
    for digit in standard.chars() {
        match alphabet.symbol_for_digit(digit) {
            Some(symbol) => result.push_str(symbol),
            // STANDARD only emits A-Z a-z 0-9 + / =
            None => unreachable!("standard base64 emitted {:?}", digit),
        }
    }
    result
}

/// Reconstructs the standard base-64 text behind a symbol stream.
///
/// Whitespace is dropped; padding symbols become `=`.
pub fn to_standard(encoded: &str) -> Result<String, CodecError> {
    let alphabet = Alphabet::for_scheme(Scheme::Base64);

    let mut standard = String::with_capacity(encoded.len() / 4);
    for token in tokenize(encoded, alphabet) {
        if let Some(digit) = alphabet.digit_for_token(token?) {
            standard.push(digit);
        }
    }
    Ok(standard)
}

/// Decodes a symbol stream back to bytes.
///
/// Decoding is strict: the reconstructed base-64 text must have a valid
/// length, canonical padding and no trailing bits.
pub fn decode(encoded: &str) -> Result<Vec<u8>, CodecError> {
    let standard = to_standard(encoded)?;
    Ok(STANDARD.decode(standard.as_bytes())?)
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
