use crate::core::alphabet::Alphabet;
use crate::core::scheme::Scheme;
use crate::encoders::tokenizer::tokenize;
use tracing::debug;

/// True iff `input` is made only of nibble symbols and whitespace, with at
/// least one symbol present.
pub fn looks_like_nibble_stream(input: &str) -> bool {
    looks_like(input, Scheme::Nibble)
}

/// True iff `input` is made only of base64 symbols, padding and whitespace,
/// with at least one symbol present.
pub fn looks_like_base64_stream(input: &str) -> bool {
    looks_like(input, Scheme::Base64)
}

/// True iff `input` tokenizes cleanly in the alphabet of `scheme` and is not blank.
pub fn looks_like(input: &str, scheme: Scheme) -> bool {
    let mut seen = false;
    for token in tokenize(input, Alphabet::for_scheme(scheme)) {
        if token.is_err() {
            return false;
        }
        seen = true;
    }
    seen
}

/// Every scheme whose alphabet covers `input`, in priority order.
///
/// The nibble alphabet is a subset of the base64 alphabet, so a nibble
/// stream is always a base64 candidate too.
pub fn candidates(input: &str) -> Vec<Scheme> {
    Scheme::ALL
        .into_iter()
        .filter(|&scheme| looks_like(input, scheme))
        .collect()
}

/// Picks the scheme that most likely produced `input`.
///
/// Nibble wins over base64 when both alphabets cover the input. Returns
/// `None` when neither does.
pub fn detect_scheme(input: &str) -> Option<Scheme> {
    let detected = Scheme::ALL
        .into_iter()
        .find(|&scheme| looks_like(input, scheme));
    debug!(scheme = ?detected, "scheme detection");
    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::PADDING_SYMBOL;

    #[test]
    fn test_nibble_stream() {
        assert!(looks_like_nibble_stream("😄😊 😆🙂\n"));
        assert_eq!(detect_scheme("😄😊😆🙂"), Some(Scheme::Nibble));
    }

    #[test]
    fn test_nibble_priority_when_both_match() {
        let input = "😀😁😂😃";
        assert!(looks_like_nibble_stream(input));
        assert!(looks_like_base64_stream(input));
        assert_eq!(detect_scheme(input), Some(Scheme::Nibble));
        assert_eq!(candidates(input), vec![Scheme::Nibble, Scheme::Base64]);
    }

    #[test]
    fn test_base64_only_symbols() {
        let input = format!("😶😪{}{}", PADDING_SYMBOL, PADDING_SYMBOL);
        assert!(!looks_like_nibble_stream(&input));
        assert!(looks_like_base64_stream(&input));
        assert_eq!(detect_scheme(&input), Some(Scheme::Base64));
    }

    #[test]
    fn test_multi_codepoint_symbol_counts_as_base64() {
        assert!(looks_like_base64_stream("\u{2639}\u{FE0F}😀"));
        assert!(!looks_like_base64_stream("\u{2639}😀"));
    }

    #[test]
    fn test_blank_input_matches_nothing() {
        assert!(!looks_like_nibble_stream(""));
        assert!(!looks_like_base64_stream("  \n\t"));
        assert_eq!(detect_scheme(" "), None);
        assert!(candidates("").is_empty());
    }

    #[test]
    fn test_plain_text_matches_nothing() {
        assert_eq!(detect_scheme("hello"), None);
        assert_eq!(detect_scheme("😀 hello"), None);
    }
}
