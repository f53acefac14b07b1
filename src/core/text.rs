use crate::core::scheme::Direction;
use crate::encoders::errors::CodecError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte encoding declared for the text on either side of the codec.
///
/// Encoding turns text into bytes with this encoding before they are
/// mapped to symbols; decoding requires the recovered bytes to be strictly
/// valid in it (no replacement characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
    #[serde(rename = "utf-16le", alias = "utf16le")]
    Utf16Le,
    #[serde(rename = "utf-16be", alias = "utf16be")]
    Utf16Be,
    #[serde(rename = "ascii", alias = "us-ascii")]
    Ascii,
}

impl TextEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Ascii => "ascii",
        }
    }

    /// Encodes `text` into bytes.
    ///
    /// Only [`TextEncoding::Ascii`] can fail: the Unicode encodings represent
    /// every `str`.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            TextEncoding::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            TextEncoding::Ascii => {
                if let Some((position, c)) = text.chars().enumerate().find(|(_, c)| !c.is_ascii())
                {
                    return Err(self.error(
                        Direction::Encode,
                        format!(
                            "character '{}' (U+{:04X}) at position {} is not representable",
                            c, c as u32, position
                        ),
                    ));
                }
                Ok(text.as_bytes().to_vec())
            }
        }
    }

    /// Decodes `bytes` strictly; any invalid sequence is an error.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        match self {
            TextEncoding::Utf8 => String::from_utf8(bytes.to_vec())
                .map_err(|e| self.error(Direction::Decode, e.utf8_error().to_string())),
            TextEncoding::Utf16Le => self.decode_utf16(bytes, u16::from_le_bytes),
            TextEncoding::Utf16Be => self.decode_utf16(bytes, u16::from_be_bytes),
            TextEncoding::Ascii => {
                if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(self.error(
                        Direction::Decode,
                        format!("byte 0x{:02x} at offset {} is not ASCII", bytes[offset], offset),
                    ));
                }
                // All bytes are ASCII, so this cannot fail.
                String::from_utf8(bytes.to_vec())
                    .map_err(|e| self.error(Direction::Decode, e.utf8_error().to_string()))
            }
        }
    }

    fn decode_utf16(
        &self,
        bytes: &[u8],
        unit: fn([u8; 2]) -> u16,
    ) -> Result<String, CodecError> {
        if bytes.len() % 2 != 0 {
            return Err(self.error(
                Direction::Decode,
                format!("{} bytes is not a whole number of UTF-16 code units", bytes.len()),
            ));
        }

        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| unit([pair[0], pair[1]]))
            .collect();

        String::from_utf16(&units).map_err(|e| self.error(Direction::Decode, e.to_string()))
    }

    fn error(&self, direction: Direction, reason: String) -> CodecError {
        CodecError::text_encoding(*self, direction, reason)
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
