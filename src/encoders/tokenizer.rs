//! Segmentation of symbol streams into alphabet tokens.
//!
//! Symbols may span two codepoints (a base glyph plus a variation
//! selector), so the scan tries a two-codepoint window before a single
//! codepoint at every position. Whitespace between symbols is skipped.

use crate::core::alphabet::{Alphabet, Token};
use crate::encoders::errors::CodecError;

/// Tokenizes `input` against `alphabet`.
///
/// Each call starts a fresh scan from the beginning of `input`.
pub fn tokenize<'a>(input: &'a str, alphabet: &'a Alphabet) -> Tokens<'a> {
    Tokens {
        input,
        alphabet,
        offset: 0,
        position: 0,
    }
}

/// Lazy, forward-only scan over a symbol stream.
///
/// Yields `Err` once, for the first unit that is neither a symbol nor
/// whitespace, and is exhausted afterwards.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    alphabet: &'a Alphabet,
    /// Byte offset of the next unscanned codepoint
    offset: usize,
    /// Codepoint index of the next unscanned codepoint
    position: usize,
}

impl Tokens<'_> {
    fn advance(&mut self, bytes: usize, codepoints: usize) {
        self.offset += bytes;
        self.position += codepoints;
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<Token, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let rest = &self.input[self.offset..];
            let mut chars = rest.chars();
            let first = chars.next()?;
            let first_len = first.len_utf8();

            if let Some(second) = chars.next() {
                let pair_len = first_len + second.len_utf8();
                if let Some(token) = self.alphabet.lookup(&rest[..pair_len]) {
                    self.advance(pair_len, 2);
                    return Some(Ok(token));
                }
            }

            if let Some(token) = self.alphabet.lookup(&rest[..first_len]) {
                self.advance(first_len, 1);
                return Some(Ok(token));
            }

            if first.is_whitespace() {
                self.advance(first_len, 1);
                continue;
            }

            let err = CodecError::unrecognized_symbol(first, self.position, self.alphabet.scheme());
            self.offset = self.input.len();
            return Some(Err(err));
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::PADDING_SYMBOL;
    use crate::core::scheme::Scheme;

    fn collect(input: &str, scheme: Scheme) -> Result<Vec<Token>, CodecError> {
        tokenize(input, Alphabet::for_scheme(scheme)).collect()
    }

    #[test]
    fn test_single_codepoint_symbols() {
        let tokens = collect("😀😗😊", Scheme::Nibble).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Value(0), Token::Value(15), Token::Value(8)]
        );
    }

    #[test]
    fn test_whitespace_is_transparent() {
        let tokens = collect(" 😀\n\t😗  \r\n", Scheme::Nibble).unwrap();
        assert_eq!(tokens, vec![Token::Value(0), Token::Value(15)]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(collect("", Scheme::Base64).unwrap().is_empty());
        assert!(collect(" \n ", Scheme::Base64).unwrap().is_empty());
    }

    #[test]
    fn test_two_codepoint_symbol_matched_first() {
        let input = format!("😀\u{2639}\u{FE0F}{}", PADDING_SYMBOL);
        let tokens = collect(&input, Scheme::Base64).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Value(0), Token::Value(49), Token::Padding]
        );
    }

    #[test]
    fn test_bare_base_glyph_is_unrecognized() {
        let err = collect("😀\u{2639}😀", Scheme::Base64).unwrap_err();
        assert_eq!(
            err,
            CodecError::unrecognized_symbol('\u{2639}', 1, Scheme::Base64)
        );
    }

    #[test]
    fn test_unknown_codepoint_reports_position() {
        let err = collect("😀 😁 A", Scheme::Nibble).unwrap_err();
        assert_eq!(err, CodecError::unrecognized_symbol('A', 4, Scheme::Nibble));
    }

    #[test]
    fn test_padding_not_in_nibble_alphabet() {
        let err = collect(PADDING_SYMBOL, Scheme::Nibble).unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnrecognizedSymbol { position: 0, .. }
        ));
    }

    #[test]
    fn test_fused_after_error() {
        let mut tokens = tokenize("x😀", Alphabet::for_scheme(Scheme::Nibble));
        assert!(matches!(tokens.next(), Some(Err(_))));
        assert!(tokens.next().is_none());
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_lazy_scan_yields_before_error() {
        let mut tokens = tokenize("😁x", Alphabet::for_scheme(Scheme::Nibble));
        assert_eq!(tokens.next(), Some(Ok(Token::Value(1))));
        assert!(matches!(tokens.next(), Some(Err(_))));
    }

    #[test]
    fn test_restartable_from_start() {
        let alphabet = Alphabet::for_scheme(Scheme::Nibble);
        let first: Vec<_> = tokenize("😀😁", alphabet).collect();
        let second: Vec<_> = tokenize("😀😁", alphabet).collect();
        assert_eq!(first, second);
    }
}
