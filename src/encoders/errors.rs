use crate::core::alphabet::Alphabet;
use crate::core::scheme::{Direction, Scheme};
use crate::core::text::TextEncoding;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reason category of a [`CodecError`], for callers that branch on the
/// condition rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnrecognizedSymbol,
    MalformedLength,
    InvalidBase64,
    TextEncoding,
    Undetected,
}

/// Errors returned by the encode/decode operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A non-whitespace codepoint matched no symbol of the active alphabet
    UnrecognizedSymbol {
        symbol: char,
        position: usize,
        scheme: Scheme,
    },
    /// A nibble stream with an odd number of symbols
    MalformedLength { symbols: usize },
    /// The remapped base-64 text failed strict validation
    InvalidBase64 { reason: String },
    /// Bytes and text could not be converted under the declared encoding
    TextEncoding {
        encoding: TextEncoding,
        direction: Direction,
        reason: String,
    },
    /// Auto-detection found no scheme matching the input
    Undetected,
}

impl CodecError {
    /// Create an UnrecognizedSymbol error. `position` is a codepoint index.
    pub fn unrecognized_symbol(symbol: char, position: usize, scheme: Scheme) -> Self {
        CodecError::UnrecognizedSymbol {
            symbol,
            position,
            scheme,
        }
    }

    pub fn malformed_length(symbols: usize) -> Self {
        CodecError::MalformedLength { symbols }
    }

    pub fn invalid_base64(reason: impl Into<String>) -> Self {
        CodecError::InvalidBase64 {
            reason: reason.into(),
        }
    }

    pub fn text_encoding(
        encoding: TextEncoding,
        direction: Direction,
        reason: impl Into<String>,
    ) -> Self {
        CodecError::TextEncoding {
            encoding,
            direction,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::UnrecognizedSymbol { .. } => ErrorKind::UnrecognizedSymbol,
            CodecError::MalformedLength { .. } => ErrorKind::MalformedLength,
            CodecError::InvalidBase64 { .. } => ErrorKind::InvalidBase64,
            CodecError::TextEncoding { .. } => ErrorKind::TextEncoding,
            CodecError::Undetected => ErrorKind::Undetected,
        }
    }
}

impl From<::base64::DecodeError> for CodecError {
    fn from(err: ::base64::DecodeError) -> Self {
        CodecError::invalid_base64(err.to_string())
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            CodecError::UnrecognizedSymbol {
                symbol,
                position,
                scheme,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "unrecognized symbol '{}' (U+{:04X}) at position {} in {} stream",
                        symbol, *symbol as u32, position, scheme
                    ),
                )?;

                let valid: String = Alphabet::for_scheme(*scheme).symbols().concat();
                let valid_count = valid.chars().count();
                let hint_symbols = if valid_count > 24 {
                    let head: String = valid.chars().take(24).collect();
                    format!("{}...", head)
                } else {
                    valid
                };
                write_hint(f, use_color, &format!("valid symbols: {}", hint_symbols))
            }
            CodecError::MalformedLength { symbols } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "malformed nibble stream: {} symbols cannot pair into bytes",
                        symbols
                    ),
                )?;
                write_hint(
                    f,
                    use_color,
                    "every byte is two symbols; one was probably lost or added in transit",
                )
            }
            CodecError::InvalidBase64 { reason } => {
                write_header(f, use_color, &format!("base64 decode error: {}", reason))?;
                write_hint(
                    f,
                    use_color,
                    "check for missing symbols or misplaced padding at the end of the stream",
                )
            }
            CodecError::TextEncoding {
                encoding,
                direction,
                reason,
            } => {
                let message = match direction {
                    Direction::Decode => {
                        format!("decode error: bytes are not valid {}: {}", encoding, reason)
                    }
                    Direction::Encode => format!(
                        "encode error: text cannot be represented as {}: {}",
                        encoding, reason
                    ),
                };
                write_header(f, use_color, &message)
            }
            CodecError::Undetected => {
                write_header(f, use_color, "cannot detect encoded emoji stream")?;
                write_hint(
                    f,
                    use_color,
                    "input must consist only of nibble or base64 symbols and whitespace",
                )
            }
        }
    }
}

impl std::error::Error for CodecError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f)?;
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

static COLOR_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turns ANSI colour in [`CodecError`] messages on or off.
///
/// Off by default, so `to_string()` yields plain text. The command-line
/// front-end enables it when writing to a terminal.
pub fn set_color(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn should_use_color() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Violations of the alphabet construction rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    WrongCardinality {
        scheme: Scheme,
        expected: usize,
        actual: usize,
    },
    DuplicateSymbol {
        symbol: String,
        first: usize,
        second: usize,
    },
    /// Empty, longer than two codepoints, or containing whitespace
    InvalidSymbol { symbol: String, index: usize },
    MissingPadding,
    UnexpectedPadding { scheme: Scheme },
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::WrongCardinality {
                scheme,
                expected,
                actual,
            } => write!(
                f,
                "{} alphabet must contain exactly {} symbols, got {}",
                scheme, expected, actual
            ),
            AlphabetError::DuplicateSymbol {
                symbol,
                first,
                second,
            } => write!(
                f,
                "duplicate symbol {:?} at positions {} and {}",
                symbol, first, second
            ),
            AlphabetError::InvalidSymbol { symbol, index } => write!(
                f,
                "invalid symbol {:?} at position {}: must be 1-2 codepoints without whitespace",
                symbol, index
            ),
            AlphabetError::MissingPadding => write!(f, "base64 alphabet requires a padding symbol"),
            AlphabetError::UnexpectedPadding { scheme } => {
                write!(f, "{} alphabet does not take a padding symbol", scheme)
            }
        }
    }
}

impl std::error::Error for AlphabetError {}
